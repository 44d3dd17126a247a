pub mod run;
pub mod template;
