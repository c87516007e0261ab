//! Prompt template for the code-generation assistant

use crate::analyzer::AnalysisResult;

const TITLE: &str = "# Codex编码助手";
const INSTRUCTION: &str = "请根据以下需求文档生成相应的代码：\n";
const LANGUAGE_LABEL: &str = "编程语言: ";
const FUNCTIONAL_HEADER: &str = "功能需求:";
const NON_FUNCTIONAL_HEADER: &str = "非功能性需求:";
const DOCUMENT_HEADER: &str = "详细需求文档:";
const FENCE: &str = "```";
const CLOSING_INSTRUCTION: &str = "\n请根据以上需求生成完整的代码实现，包括:";
const DELIVERABLES: [&str; 4] = [
    "- 必要的导入语句",
    "- 完整的函数/类定义",
    "- 适当的注释说明",
    "- 示例用法",
];

/// Renders an analysis result and its document into a prompt
pub struct PromptFormatter;

impl PromptFormatter {
    /// Build the prompt. Empty lists drop their whole section, header included.
    pub fn format(result: &AnalysisResult, document: &str) -> String {
        let mut parts: Vec<String> = vec![TITLE.to_string(), INSTRUCTION.to_string()];

        if !result.languages.is_empty() {
            parts.push(format!("{}{}\n", LANGUAGE_LABEL, result.languages.join(", ")));
        }

        if !result.functionalities.is_empty() {
            parts.push(FUNCTIONAL_HEADER.to_string());
            parts.extend(
                result
                    .functionalities
                    .iter()
                    .enumerate()
                    .map(|(i, func)| format!("{}. {}", i + 1, func)),
            );
            parts.push(String::new());
        }

        if !result.non_functional_requirements.is_empty() {
            parts.push(NON_FUNCTIONAL_HEADER.to_string());
            parts.extend(result.non_functional_requirements.iter().map(|req| format!("- {}", req)));
            parts.push(String::new());
        }

        parts.push(DOCUMENT_HEADER.to_string());
        parts.push(FENCE.to_string());
        parts.push(document.to_string());
        parts.push(FENCE.to_string());

        parts.push(CLOSING_INSTRUCTION.to_string());
        parts.extend(DELIVERABLES.iter().map(|d| d.to_string()));

        parts.join("\n")
    }
}

/// Build the prompt for an analysis result and its document
pub fn format_prompt(result: &AnalysisResult, document: &str) -> String {
    PromptFormatter::format(result, document)
}
