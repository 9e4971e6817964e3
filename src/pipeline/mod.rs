pub mod spectral; // Spectral classification parser
pub mod tables; // Static lookup tables: spectral profiles, category defaults, known objects
pub mod derivation; // Attribute resolution by priority tier
pub mod prompt_templates;
pub mod builder;
pub mod negative;
pub mod validation;
pub mod confidence;
pub mod generation_log; // Bounded FIFO of past compilations
pub mod compiler;
pub mod batch;

pub use batch::{BatchOrchestrator, BatchReport, BatchResult, BatchStatistics};
pub use compiler::{CompiledPrompt, PromptCompiler};
pub use confidence::{ConfidenceFactors, PromptConfidence};
pub use generation_log::{GenerationLog, GenerationLogEntry, LogQuery, LogSummary};
pub use negative::get_negative_prompt;
pub use spectral::{parse_spectral_type, ParsedSpectralType};
pub use validation::{validate_prompt, ValidationReport};
