//! Demo and smoke-test scenarios for the KAgent chatbot tools server.
//!
//! Each module under [`scenarios`] mirrors one manual walkthrough against a
//! running tools server; the binaries in `src/bin/` are thin shims that
//! pick a base URL and run one scenario. Scenario functions write their
//! narration to a caller-supplied sink so the flows stay testable against
//! a stub server, and they never abort the process on a failed step.

pub mod scenarios;
