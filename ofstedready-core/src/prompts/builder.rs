use super::templates::{ADDITIONAL_CONTEXT_MARKER, PromptTemplates};
use crate::catalog;
use crate::types::{GenerationRequest, SchoolProfile};

/// Renders the generation prompt for a request and school profile.
///
/// Output depends only on its inputs: two calls with the same request and
/// profile yield identical strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, request: &GenerationRequest, profile: &SchoolProfile) -> String {
        let spec = catalog::lookup(&request.content_type_id);
        // unknown ids take the curriculum template but the generic citation
        let statutory_reference = catalog::statutory_reference_for(&request.content_type_id);

        let school_type = profile.school_type.label();
        let age_range = &profile.age_range;
        let school_name = &profile.name;
        let headteacher = &profile.headteacher;

        let context_block = request
            .context()
            .map(|context| format!("\n{ADDITIONAL_CONTEXT_MARKER} {context}"))
            .unwrap_or_default();

        format!(
            "{preamble} Create high-quality content for a UK {school_type} school (ages {age_range}) called '{school_name}' with headteacher '{headteacher}'.
KEY REQUIREMENTS:
- Must be fully compliant with the 'What maintained schools must publish online' guidance ({gov_requirement})
- Align with relevant statutory requirements ({statutory_reference})
{key_requirements}
CONTENT SPECIFICS:
- Title: {title}
- Purpose: {description}
- Required Sections: {key_sections}
- Legal Requirements: {gov_requirement}
- Quality Standards: {quality_criteria}
FORMATTING INSTRUCTIONS:
- Output Format: {format_instruction}
- Detail Level: {detail_instruction}
{formatting_guidelines}
SCHOOL CONTEXT:
- School Type: {school_type} school
- Age Range: {age_range} years
- School Name: {school_name}
- Headteacher: {headteacher}
{context_block}
{closing_instructions}
{review_notice}",
            preamble = PromptTemplates::role_preamble(),
            gov_requirement = spec.gov_requirement,
            key_requirements = PromptTemplates::key_requirements(),
            title = spec.title,
            description = spec.description,
            key_sections = spec.key_sections_text(),
            quality_criteria = spec.quality_criteria,
            format_instruction = PromptTemplates::format_instruction(request.output_format),
            detail_instruction = PromptTemplates::detail_instruction(request.detail_level),
            formatting_guidelines = PromptTemplates::formatting_guidelines(),
            closing_instructions = PromptTemplates::closing_instructions(),
            review_notice = PromptTemplates::review_notice(),
        )
    }
}

/// Shorthand for `PromptBuilder::new().build(..)`
pub fn build_prompt(request: &GenerationRequest, profile: &SchoolProfile) -> String {
    PromptBuilder::new().build(request, profile)
}
