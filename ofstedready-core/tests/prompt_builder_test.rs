use ofstedready_core::prompts::{ADDITIONAL_CONTEXT_MARKER, PromptBuilder, PromptTemplates};
use ofstedready_core::types::{DetailLevel, GenerationRequest, OutputFormat, SchoolProfile, SchoolType};
use ofstedready_core::catalog;

fn profile() -> SchoolProfile {
    SchoolProfile {
        name: "Oakfield Academy".to_string(),
        headteacher: "Dr A. Patel".to_string(),
        school_type: SchoolType::Secondary,
        age_range: "11-18".to_string(),
    }
}

#[test]
fn every_format_and_detail_combination_is_rendered() {
    let builder = PromptBuilder::new();
    for format in OutputFormat::ALL {
        for detail in DetailLevel::ALL {
            let request = GenerationRequest::new("pupil_premium")
                .with_output_format(format)
                .with_detail_level(detail);
            let prompt = builder.build(&request, &profile());

            assert!(prompt.contains("- Title: Pupil Premium Strategy"));
            assert!(prompt.contains(PromptTemplates::format_instruction(format)));
            assert!(prompt.contains(PromptTemplates::detail_instruction(detail)));
            assert!(!prompt.contains(ADDITIONAL_CONTEXT_MARKER));
        }
    }
}

#[test]
fn school_profile_is_interpolated() {
    let prompt = PromptBuilder::new().build(&GenerationRequest::new("ethos"), &profile());
    assert!(prompt.contains(
        "for a UK secondary school (ages 11-18) called 'Oakfield Academy' with headteacher 'Dr A. Patel'"
    ));
    assert!(prompt.contains("- School Type: secondary school"));
    assert!(prompt.contains("- Age Range: 11-18 years"));
    assert!(prompt.contains("- Headteacher: Dr A. Patel"));
}

#[test]
fn all_through_schools_use_hyphenated_label() {
    let mut profile = profile();
    profile.school_type = SchoolType::AllThrough;
    let prompt = PromptBuilder::new().build(&GenerationRequest::new("ethos"), &profile);
    assert!(prompt.contains("a UK all-through school"));
}

#[test]
fn additional_context_appears_only_when_non_empty() {
    let builder = PromptBuilder::new();

    let with_context = GenerationRequest::new("behaviour")
        .with_additional_context("We are a Church of England school");
    let prompt = builder.build(&with_context, &profile());
    assert!(prompt.contains("ADDITIONAL CONTEXT: We are a Church of England school"));

    let empty = GenerationRequest::new("behaviour").with_additional_context("");
    assert!(!builder.build(&empty, &profile()).contains(ADDITIONAL_CONTEXT_MARKER));
}

#[test]
fn whitespace_context_still_adds_marker() {
    let request = GenerationRequest::new("behaviour").with_additional_context("   ");
    let prompt = PromptBuilder::new().build(&request, &profile());
    assert!(prompt.contains("ADDITIONAL CONTEXT:    \n"));
}

#[test]
fn padded_context_is_inserted_verbatim() {
    let request = GenerationRequest::new("behaviour").with_additional_context("  Two sites\n");
    let prompt = PromptBuilder::new().build(&request, &profile());
    assert!(prompt.contains("ADDITIONAL CONTEXT:   Two sites\n"));
}

#[test]
fn context_sits_between_school_details_and_closing_instructions() {
    let request = GenerationRequest::new("behaviour").with_additional_context("Rural site");
    let prompt = PromptBuilder::new().build(&request, &profile());

    let headteacher = prompt.find("- Headteacher: Dr A. Patel").unwrap();
    let context = prompt.find(ADDITIONAL_CONTEXT_MARKER).unwrap();
    let closing = prompt.find("ADDITIONAL INSTRUCTIONS:").unwrap();
    assert!(headteacher < context && context < closing);
}

#[test]
fn statutory_reference_and_sections_come_from_catalog() {
    let spec = catalog::lookup("safeguarding");
    let prompt = PromptBuilder::new().build(&GenerationRequest::new("safeguarding"), &profile());
    assert!(prompt.contains(&format!(
        "Align with relevant statutory requirements ({})",
        spec.statutory_reference
    )));
    assert!(prompt.contains(&format!("- Required Sections: {}", spec.key_sections.join(", "))));
    assert!(prompt.ends_with(PromptTemplates::review_notice()));
}

#[test]
fn unknown_type_uses_curriculum_with_generic_reference() {
    let prompt = PromptBuilder::new().build(&GenerationRequest::new("nope"), &profile());
    let curriculum = catalog::lookup("curriculum");
    assert!(prompt.contains(&format!("- Title: {}", curriculum.title)));
    assert!(prompt.contains(&format!(
        "({})",
        catalog::GENERIC_STATUTORY_REFERENCE
    )));
    assert!(!prompt.contains(curriculum.statutory_reference));
}

#[test]
fn rendering_is_deterministic() {
    let request = GenerationRequest::new("remote_education")
        .with_output_format(OutputFormat::Structured)
        .with_detail_level(DetailLevel::Comprehensive)
        .with_additional_context("Laptops issued to Year 7");
    let builder = PromptBuilder::new();
    assert_eq!(builder.build(&request, &profile()), builder.build(&request, &profile()));
}
