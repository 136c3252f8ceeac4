//! Prompt construction for every generation step.

/// Fixed system role sent with every completion request.
pub const SYSTEM_ROLE: &str = "You are a creative and engaging book writer, \
skilled at adapting your writing style to the topic and audience.";

/// Prompt for the book structure (title + chapter list) as JSON.
pub fn structure_prompt(topic: &str) -> String {
    format!(
        r#"Create a complete book structure about {topic}. Consider the scope and complexity of the topic to determine the appropriate number of chapters.
Return ONLY valid JSON in this format:
{{
    "title": "An engaging and appropriate title",
    "chapters": [
        {{"title": "Chapter title", "description": "Brief description of chapter content"}}
    ]
}}

Guidelines:
- Choose an appropriate number of chapters based on the topic
- Each chapter should have a clear focus and purpose
- Chapter titles should be engaging and descriptive
- Ensure logical flow and progression between chapters
- Consider the target audience when structuring"#
    )
}

/// Prompt for a detailed markdown outline of one chapter.
pub fn outline_prompt(chapter_title: &str, topic: &str) -> String {
    format!(
        r#"Create a detailed and engaging outline for the chapter "{chapter_title}" in a book about {topic}.
Consider the narrative flow and reader engagement while including:
- Key story elements or concepts to cover
- Natural progression of ideas
- Engaging subtopics and their development
- Points where examples or illustrations would be effective

Format in proper markdown with headers, bullet points, and nested lists.
Make the structure flow naturally and keep the reader engaged throughout."#
    )
}

/// Prompt for the chapter content, written against its outline.
pub fn chapter_prompt(outline: &str) -> String {
    format!(
        r#"Write a detailed chapter following this outline:
{outline}

Requirements:
- Follow the outline structure exactly
- Professional book-like tone
- Clear explanations and examples
- Smooth transitions between sections"#
    )
}

/// Prompt for the cleanup pass over generated chapter content.
pub fn cleaning_prompt(content: &str) -> String {
    format!(
        r#"Review and enhance this chapter content for maximum engagement and clarity. Make it:
1. Flow naturally with a captivating narrative style
2. Maintain consistent tone and voice throughout
3. Use clear, audience-appropriate language
4. Include smooth transitions between sections
5. Format properly with:
   - Clear section headings (##)
   - Well-organized subsections (###)
   - Clean formatting without markdown artifacts
   - Natural paragraph breaks
   - Engaging opening and closing for each section

Content to enhance:
{content}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_prompt_names_topic_and_demands_json() {
        let prompt = structure_prompt("urban beekeeping");
        assert!(prompt.contains("urban beekeeping"));
        assert!(prompt.contains("ONLY valid JSON"));
        assert!(prompt.contains(r#""chapters""#));
    }

    #[test]
    fn outline_prompt_names_chapter_and_topic() {
        let prompt = outline_prompt("Getting Started", "urban beekeeping");
        assert!(prompt.contains(r#""Getting Started""#));
        assert!(prompt.contains("urban beekeeping"));
        assert!(prompt.contains("markdown"));
    }

    #[test]
    fn chapter_prompt_embeds_outline() {
        let prompt = chapter_prompt("## Section A\n- point");
        assert!(prompt.contains("## Section A"));
        assert!(prompt.contains("Follow the outline structure exactly"));
    }

    #[test]
    fn cleaning_prompt_embeds_content() {
        let prompt = cleaning_prompt("Raw chapter text.");
        assert!(prompt.ends_with("Raw chapter text."));
        assert!(prompt.contains("section headings (##)"));
    }
}
