//! Sitepilot - a terminal prototype of an AI assistant panel for
//! construction project management.
//!
//! The application renders a panel of AI-suggested task cards (a status
//! report request and an RFI creation), a review modal with mock generated
//! content, and a pre-filled RFI form screen. All assistant behavior is
//! simulated: fixed delays and static mock data, with no network access and
//! no persistence.
//!
//! # Modules
//!
//! * [`assistant`] - Suggestion/review domain types, mock data, and the simulated backend
//! * [`config`] - Application configuration management
//! * [`constants`] - UI text and default values
//! * [`logger`] - Shared in-memory/file logger and the `log` facade bridge
//! * [`notifications`] - Toast notification service
//! * [`ui`] - Terminal user interface components and rendering

pub mod assistant;
pub mod config;
pub mod constants;
pub mod logger;
pub mod notifications;
pub mod ui;
