// Setup Collector: validates the setup form, calls the creation endpoint and
// hands the generated questions to the Interview view.

pub mod collector;
pub mod form;
