//! Prompt templates for hosted-model threat analysis
//!
//! LLaMA-2 chat format. The system block pins the response contract:
//! strictly valid JSON with the four verdict fields, nothing else.

/// Build the threat-analysis prompt for one log excerpt.
pub fn threat_analysis_prompt(log_content: &str) -> String {
    format!(
        "[INST] <<SYS>>\n\
         You are an expert cybersecurity analyst working in a Security Operations Center (SOC).\n\
         Analyze the following security log and provide a structured threat assessment.\n\
         You MUST respond in valid JSON format with the following fields:\n\
         - threatSummary: A concise summary of the threat identified (string)\n\
         - severity: One of \"Low\", \"Medium\", \"High\", \"Critical\" (string)\n\
         - mitreTechnique: The most relevant MITRE ATT&CK technique ID and name (string, e.g. \"T1059 - Command and Scripting Interpreter\")\n\
         - recommendedActions: An array of specific remediation steps (array of strings)\n\
         <</SYS>>\n\n\
         Analyze this security log:\n\n\
         {log_content}\n\n\
         Respond with ONLY a valid JSON object. [/INST]"
    )
}
