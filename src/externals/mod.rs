pub mod event_logging;
pub mod ir_sensor;
