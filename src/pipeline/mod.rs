pub mod stage1_match;
pub mod stage2_aggregate;
pub mod stage3_layout;
pub mod stage4_project;
pub mod stage5_export;
