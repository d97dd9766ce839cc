// Document generation: prompt templates, the completion call, and the
// request pipeline that ties parsing, styling and page assembly together.
// All completion calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod kind;
pub mod pipeline;
pub mod prompts;
pub mod templates;
