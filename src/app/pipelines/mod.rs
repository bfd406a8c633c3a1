pub mod ticket_pipeline;
