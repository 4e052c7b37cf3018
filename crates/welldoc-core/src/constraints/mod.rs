pub mod continuity;
pub mod engine;
pub mod outcome;
pub mod permit;

pub use continuity::{check_formation_continuity, FormationContinuity, FormationGap};
pub use engine::{check_file_constraints, check_file_constraints_with};
pub use outcome::{summarize, ConstraintCheck, ConstraintSummary, PermitCheck, Severity};
pub use permit::check_permit_number_match;
