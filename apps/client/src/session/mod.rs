// Session Controller: question navigation, answer capture and the single
// in-flight submission of one interview.

pub mod controller;
pub mod progress;
