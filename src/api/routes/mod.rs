pub mod championships;
pub mod head_to_head;
pub mod overview;
pub mod power_rankings;
pub mod records;
