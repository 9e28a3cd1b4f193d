// ATS evaluation: prompt → model → strict parse → store.
// All model calls go through llm_client; the store is reached only via `ResultStore`.

pub mod handlers;
pub mod parser;
pub mod pipeline;
pub mod prompts;
pub mod store;
