pub mod distortion;
pub mod impact;
pub mod report;
pub mod scale;
pub mod verdict;
