//! # cinema-tickets: Ticket Purchase Service
//!
//! Wires the pure rules in `cinema-core` to the payment, seat reservation
//! and price lookup gateways.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      cinema-tickets Architecture                        │
//! │                                                                         │
//! │   Caller                                                                │
//! │     │  purchase_tickets(account_id, line_items)                        │
//! │     ▼                                                                   │
//! │  ┌─────────────────────┐      ┌──────────────────────────────────┐     │
//! │  │  TicketServiceImpl  │─────►│  cinema-core                     │     │
//! │  │  (service.rs)       │      │  accept() ─► compute_totals()    │     │
//! │  └──────────┬──────────┘      └──────────────────────────────────┘     │
//! │             │                                                           │
//! │             ├──► TicketPriceLookupService::price_for                   │
//! │             ├──► TicketPaymentService::make_payment                    │
//! │             └──► SeatReservationService::reserve_seat                  │
//! │                                                                         │
//! │  TicketsConfig (config.rs): limits + prices from TOML and environment  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//! ```rust
//! use cinema_tickets::{
//!     CollaboratorError, SeatReservationService, TicketPaymentService, TicketService,
//!     TicketServiceImpl, TicketsConfig,
//! };
//! use cinema_core::{AccountId, TicketCategory, TicketLineItem};
//!
//! struct Payments;
//! impl TicketPaymentService for Payments {
//!     fn make_payment(&self, _: AccountId, _: u32) -> Result<(), CollaboratorError> {
//!         Ok(())
//!     }
//! }
//!
//! struct Seats;
//! impl SeatReservationService for Seats {
//!     fn reserve_seat(&self, _: AccountId, _: u32) -> Result<(), CollaboratorError> {
//!         Ok(())
//!     }
//! }
//!
//! let service = TicketServiceImpl::from_config(Payments, Seats, &TicketsConfig::default());
//! service
//!     .purchase_tickets(1, &[TicketLineItem::new(TicketCategory::Adult, 2)])
//!     .unwrap();
//! ```

pub mod config;
pub mod error;
pub mod gateway;
pub mod service;

pub use config::TicketsConfig;
pub use error::{CollaboratorError, ConfigError, ConfigResult, PurchaseError, PurchaseResult};
pub use gateway::{
    PriceTable, SeatReservationService, TicketPaymentService, TicketPriceLookupService,
};
pub use service::{TicketService, TicketServiceImpl};
