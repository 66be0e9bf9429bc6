use crate::types::{DetailLevel, OutputFormat};

/// Marker that introduces caller-supplied context in a rendered prompt
pub const ADDITIONAL_CONTEXT_MARKER: &str = "ADDITIONAL CONTEXT:";

/// Prompt template collection
pub struct PromptTemplates;

impl PromptTemplates {
    /// Opening framing shared by every content type
    pub fn role_preamble() -> &'static str {
        "You are an expert in UK education compliance with extensive knowledge of the 'What maintained schools must publish online' guidance."
    }

    /// How the document should be laid out
    pub fn format_instruction(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Detailed => {
                "Present the content in detailed paragraphs with clear headings and subheadings. Use professional language suitable for official documentation. Include specific examples and implementation guidance."
            }
            OutputFormat::BulletPoints => {
                "Format the content primarily as bullet points and numbered lists with brief explanatory text. Make it easy to scan and implement. Include key action points for staff."
            }
            OutputFormat::Structured => {
                "Organize the content into clearly defined sections with headings, subheadings, bullet points, and detailed explanations where needed. Include implementation timelines and responsibilities."
            }
        }
    }

    /// How much depth the document should go into
    pub fn detail_instruction(level: DetailLevel) -> &'static str {
        match level {
            DetailLevel::Basic => {
                "Provide a concise overview covering essential points only. Keep explanations brief and focus on key requirements. Suitable for initial review."
            }
            DetailLevel::Standard => {
                "Include comprehensive coverage of important points with moderate detail. Balance thoroughness with readability. Include specific procedures and examples."
            }
            DetailLevel::Comprehensive => {
                "Provide extensive detail covering all aspects thoroughly. Include background information, detailed procedures, implementation timelines, staff responsibilities, and monitoring arrangements."
            }
        }
    }

    pub fn key_requirements() -> &'static str {
        "- Use professional but accessible language suitable for parents and the public
- Include specific implementation details and examples
- Address accessibility and inclusion throughout
- Consider different audience needs (parents, pupils, public)"
    }

    pub fn formatting_guidelines() -> &'static str {
        "- Use clear headings and subheadings
- Include bullet points for key information
- Ensure logical flow and organization"
    }

    pub fn closing_instructions() -> &'static str {
        "ADDITIONAL INSTRUCTIONS:
1. Begin with a clear introduction and purpose
2. Include all legally required information
3. Structure content for easy navigation
4. Use plain language while maintaining professionalism
5. Include any required disclaimers or notes
6. Ensure the content is practical and implementable
7. Add review date and version control information
8. Include references to relevant legislation and guidance"
    }

    /// Reminder that drafts need human review before publication
    pub fn review_notice() -> &'static str {
        "IMPORTANT: This is AI-generated content that must be reviewed by school staff before publication. Always verify current legal requirements and adapt to your school's specific circumstances."
    }
}
