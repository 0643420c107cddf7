//! # Agent Definition
//!
//! The static description of the WhatsApp lead bot handed to the external
//! conversational host: who the agent is, which model drives it, and which
//! tools it may call. The dialogue loop itself lives in the host, not here.

use crate::{
    prompts::{LEAD_AGENT_DESCRIPTION, LEAD_QUALIFICATION_SYSTEM_PROMPT},
    recorder::LeadRecorder,
    tool::{ToolRegistry, WriteLeadTool},
};
use std::sync::Arc;

/// The hosted model the agent runs on.
pub const LEAD_AGENT_MODEL: &str = "gemini-2.5-flash";

/// Everything the host needs to run the agent.
pub struct AgentDefinition {
    pub name: &'static str,
    pub model: &'static str,
    pub description: &'static str,
    pub instruction: &'static str,
    pub tools: ToolRegistry,
}

/// Builds the lead-qualification agent definition around the given recorder.
pub fn lead_agent(recorder: Arc<LeadRecorder>) -> AgentDefinition {
    let mut tools = ToolRegistry::default();
    tools.register(WriteLeadTool::new(recorder));

    AgentDefinition {
        name: "whatsapp_lead_bot",
        model: LEAD_AGENT_MODEL,
        description: LEAD_AGENT_DESCRIPTION,
        instruction: LEAD_QUALIFICATION_SYSTEM_PROMPT,
        tools,
    }
}
