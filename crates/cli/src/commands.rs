pub mod static_analysis;
