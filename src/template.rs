//! Expansion of the user's intent and parameter choices into the instruction
//! sent to the model.

use crate::params::{Constraints, Examples, Format, PromptParameters};

pub fn examples_count(examples: Examples) -> u8 {
    match examples {
        Examples::None => 0,
        Examples::Few => 2,
        Examples::Many => 4,
    }
}

pub fn format_instruction(format: Format) -> &'static str {
    match format {
        Format::Concise => "Keep the response brief and to the point",
        Format::Detailed => "Provide a balanced level of detail",
        Format::Comprehensive => "Include extensive details and explanations",
    }
}

pub fn constraint_level(constraints: Constraints) -> &'static str {
    match constraints {
        Constraints::Minimal => "with basic safety guidelines",
        Constraints::Moderate => "with clear boundaries and moderate restrictions",
        Constraints::Strict => "with strict limitations and comprehensive safety measures",
    }
}

/// Builds the instruction for the model. The user prompt is embedded as given,
/// without trimming; rejecting blank prompts is the caller's job.
pub fn expand(user_prompt: &str, parameters: &PromptParameters) -> String {
    let tone = parameters.tone;
    let complexity = parameters.complexity;
    let format = format_instruction(parameters.format);
    let examples = examples_count(parameters.examples);
    let constraints = constraint_level(parameters.constraints);

    format!(
        "Create a {tone} system prompt based on the following requirements:
{user_prompt}

Please ensure the system prompt follows these specifications:
1. Use a {tone} tone throughout the prompt
2. Match {complexity} level complexity
3. {format}
4. Include {examples} relevant examples
5. Set up {constraints}

The prompt should:
1. Be well-structured and clear
2. Include specific guidelines and constraints
3. Define the AI's role and behavior clearly
4. Be optimized for the intended use case
"
    )
}
