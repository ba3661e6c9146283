//! Built-in target list
//!
//! The fixture and entry-point files of a TypeScript bridge client whose
//! provider configs were written in the flat shape. Used only when no
//! target list file is found.

use std::path::PathBuf;

use once_cell::sync::Lazy;

use super::file::TargetList;

pub static DEFAULT_TARGETS: &[&str] = &[
    "src/__tests__/createClient.test.ts",
    "src/__tests__/exports.test.ts",
    "src/client/__tests__/bridgeClient.test.ts",
    "src/client/__tests__/bridgeClientDisposal.test.ts",
    "src/client/__tests__/bridgeClientMcpIntegration.test.ts",
    "src/client/__tests__/bridgeClientRegistries.test.ts",
    "src/client/__tests__/bridgeClientToolIntegration.test.ts",
    "src/client/__tests__/bridgeClientErrorLogging.test.ts",
    "src/__tests__/e2e/anthropic/chat.e2e.test.ts",
    "src/__tests__/e2e/anthropic/mcpTools.e2e.test.ts",
    "src/__tests__/e2e/anthropic/stdioMcpTools.e2e.test.ts",
    "src/__tests__/e2e/google/chat.e2e.test.ts",
    "src/__tests__/e2e/google/mcpTools.e2e.test.ts",
    "src/__tests__/e2e/google/stdioMcpTools.e2e.test.ts",
    "src/__tests__/e2e/openai/chat.e2e.test.ts",
    "src/__tests__/e2e/openai/mcpTools.e2e.test.ts",
    "src/__tests__/e2e/openai/stdioMcpTools.e2e.test.ts",
    "src/__tests__/e2e/xai/chat.e2e.test.ts",
    "src/__tests__/e2e/xai/mcpTools.e2e.test.ts",
    "src/__tests__/e2e/xai/stdioMcpTools.e2e.test.ts",
    "src/__tests__/e2e/shared/anthropicModelHelpers.ts",
    "src/__tests__/e2e/shared/createMcpTestClient.ts",
    "src/__tests__/e2e/shared/createMcpTestConfig.ts",
    "src/__tests__/e2e/shared/googleModelHelpers.ts",
    "src/__tests__/e2e/shared/mcpTestHelpers.test.ts",
    "src/__tests__/e2e/shared/openAIModelHelpers.ts",
    "src/__tests__/e2e/shared/rateLimiting/createRateLimitedTestClient.ts",
    "src/__tests__/e2e/shared/xaiModelHelpers.ts",
    "src/core/agent/cancellation/__tests__/cancellationIntegration.test.ts",
    "src/core/config/__tests__/bridgeConfigSchema.test.ts",
    "src/core/config/__tests__/rateLimitingConfig.test.ts",
    "src/index.ts",
    "src/client/index.ts",
];

static DEFAULT_LIST: Lazy<TargetList> = Lazy::new(|| TargetList {
    root: None,
    targets: DEFAULT_TARGETS.iter().map(PathBuf::from).collect(),
});

/// The built-in list, rooted at the current directory
pub fn default_target_list() -> TargetList {
    DEFAULT_LIST.clone()
}
