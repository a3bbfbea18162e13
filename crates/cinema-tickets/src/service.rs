//! # Ticket Service
//!
//! Validates, prices, pays for and reserves a ticket purchase.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       purchase(request)                                 │
//! │                                                                         │
//! │  1. cinema_core::accept ── any rule violated? ──► Err(Rejected)        │
//! │        │                   (no gateway touched)                         │
//! │        ▼                                                                │
//! │  2. compute_totals (price_for once per line item)                      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  3. make_payment(account, price)     ── fails? ──► Err(Payment)        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  4. reserve_seat(account, tickets)   ── fails? ──► Err(Reservation)    │
//! │        │                                                                │
//! │        ▼                                                                │
//! │     Ok(())                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The service keeps no state between calls beyond its gateways and limits,
//! so concurrent purchases never observe each other.

use cinema_core::pricing::compute_totals;
use cinema_core::{accept, AccountId, PurchaseLimits, PurchaseRequest, TicketLineItem};
use tracing::{debug, info, warn};

use crate::config::TicketsConfig;
use crate::error::{PurchaseError, PurchaseResult};
use crate::gateway::{
    PriceTable, SeatReservationService, TicketPaymentService, TicketPriceLookupService,
};

/// Entry point for buying tickets.
pub trait TicketService {
    /// Runs one purchase attempt.
    ///
    /// Either every rule passes and exactly one payment followed by exactly
    /// one reservation is made, or nothing is charged or reserved.
    fn purchase(&self, request: &PurchaseRequest<'_>) -> PurchaseResult<()>;

    /// Convenience for callers that always have an account and a list.
    fn purchase_tickets(
        &self,
        account_id: AccountId,
        line_items: &[TicketLineItem],
    ) -> PurchaseResult<()> {
        self.purchase(&PurchaseRequest::new(account_id, line_items))
    }
}

/// [`TicketService`] over injected payment, reservation and price gateways.
#[derive(Debug)]
pub struct TicketServiceImpl<P, R, L> {
    payment: P,
    reservation: R,
    prices: L,
    limits: PurchaseLimits,
}

impl<P, R, L> TicketServiceImpl<P, R, L>
where
    P: TicketPaymentService,
    R: SeatReservationService,
    L: TicketPriceLookupService,
{
    /// Creates a service with the default purchase limits.
    pub fn new(payment: P, reservation: R, prices: L) -> Self {
        TicketServiceImpl {
            payment,
            reservation,
            prices,
            limits: PurchaseLimits::default(),
        }
    }

    /// Replaces the purchase limits.
    pub fn with_limits(mut self, limits: PurchaseLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &PurchaseLimits {
        &self.limits
    }
}

impl<P, R> TicketServiceImpl<P, R, PriceTable>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    /// Creates a service priced and limited by `config`.
    pub fn from_config(payment: P, reservation: R, config: &TicketsConfig) -> Self {
        TicketServiceImpl::new(payment, reservation, config.prices)
            .with_limits(config.limits)
    }
}

impl<P, R, L> TicketService for TicketServiceImpl<P, R, L>
where
    P: TicketPaymentService,
    R: SeatReservationService,
    L: TicketPriceLookupService,
{
    fn purchase(&self, request: &PurchaseRequest<'_>) -> PurchaseResult<()> {
        debug!(
            account_id = ?request.account_id,
            line_items = request.line_items_or_empty().len(),
            "Validating ticket purchase"
        );

        let accepted = accept(request, &self.limits).map_err(|err| {
            let err = PurchaseError::Rejected(err);
            warn!(
                account_id = ?request.account_id,
                rules = err.violated_rule_count(),
                reason = %err,
                "Ticket purchase rejected"
            );
            err
        })?;

        let totals = compute_totals(accepted.line_items, |category| {
            self.prices.price_for(category)
        })?;
        debug!(
            account_id = accepted.account_id,
            ticket_count = totals.ticket_count,
            price = totals.price,
            "Computed purchase totals"
        );

        self.payment
            .make_payment(accepted.account_id, totals.price)
            .map_err(PurchaseError::Payment)?;
        self.reservation
            .reserve_seat(accepted.account_id, totals.ticket_count)
            .map_err(PurchaseError::Reservation)?;

        info!(
            account_id = accepted.account_id,
            ticket_count = totals.ticket_count,
            price = totals.price,
            "Ticket purchase completed"
        );
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollaboratorError;
    use crate::gateway::{
        MockSeatReservationService, MockTicketPaymentService, MockTicketPriceLookupService,
    };
    use cinema_core::CoreError;
    use cinema_core::TicketCategory::{self, Adult, Child, Infant};
    use mockall::predicate::eq;
    use mockall::Sequence;

    type MockService = TicketServiceImpl<
        MockTicketPaymentService,
        MockSeatReservationService,
        MockTicketPriceLookupService,
    >;

    const ACCOUNT: AccountId = 1;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    }

    fn item(category: TicketCategory, quantity: u32) -> TicketLineItem {
        TicketLineItem::new(category, quantity)
    }

    fn standard_prices() -> MockTicketPriceLookupService {
        let mut prices = MockTicketPriceLookupService::new();
        prices.expect_price_for().returning(|category| match category {
            Adult => 25,
            Child => 15,
            Infant => 0,
        });
        prices
    }

    /// Gateways that fail the test if anything is charged or reserved.
    fn untouched_service() -> MockService {
        let mut payment = MockTicketPaymentService::new();
        payment.expect_make_payment().never();
        let mut reservation = MockSeatReservationService::new();
        reservation.expect_reserve_seat().never();
        let mut prices = MockTicketPriceLookupService::new();
        prices.expect_price_for().never();
        TicketServiceImpl::new(payment, reservation, prices)
    }

    /// Gateways expecting exactly one payment then exactly one reservation.
    fn expecting(price: u32, tickets: u32) -> MockService {
        let mut seq = Sequence::new();
        let mut payment = MockTicketPaymentService::new();
        payment
            .expect_make_payment()
            .with(eq(ACCOUNT), eq(price))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        let mut reservation = MockSeatReservationService::new();
        reservation
            .expect_reserve_seat()
            .with(eq(ACCOUNT), eq(tickets))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        TicketServiceImpl::new(payment, reservation, standard_prices())
    }

    fn rejection(result: PurchaseResult<()>) -> String {
        match result {
            Err(PurchaseError::Rejected(CoreError::InvalidPurchase(msg))) => msg,
            other => panic!("expected a rejected purchase, got {:?}", other),
        }
    }

    // -------------------------------------------------------------------------
    // Valid purchases
    // -------------------------------------------------------------------------

    #[test]
    fn test_purchase_one_adult_ticket() {
        init_tracing();
        let service = expecting(25, 1);
        service
            .purchase_tickets(ACCOUNT, &[item(Adult, 1)])
            .unwrap();
    }

    #[test]
    fn test_purchase_two_adult_tickets() {
        let service = expecting(50, 2);
        service
            .purchase_tickets(ACCOUNT, &[item(Adult, 2)])
            .unwrap();
    }

    #[test]
    fn test_purchase_adult_and_child() {
        let service = expecting(40, 2);
        service
            .purchase_tickets(ACCOUNT, &[item(Adult, 1), item(Child, 1)])
            .unwrap();
    }

    #[test]
    fn test_zero_quantity_infant_contributes_nothing() {
        let service = expecting(40, 2);
        service
            .purchase_tickets(ACCOUNT, &[item(Adult, 1), item(Child, 1), item(Infant, 0)])
            .unwrap();
    }

    #[test]
    fn test_two_adults_child_and_zero_infant() {
        let service = expecting(65, 3);
        service
            .purchase_tickets(ACCOUNT, &[item(Adult, 2), item(Child, 1), item(Infant, 0)])
            .unwrap();
    }

    #[test]
    fn test_infants_are_counted_as_tickets() {
        let service = expecting(25, 2);
        service
            .purchase_tickets(ACCOUNT, &[item(Adult, 1), item(Infant, 1)])
            .unwrap();
    }

    #[test]
    fn test_three_children_one_infant_one_adult_accepted() {
        let service = expecting(70, 5);
        service
            .purchase_tickets(ACCOUNT, &[item(Child, 3), item(Infant, 1), item(Adult, 1)])
            .unwrap();
    }

    #[test]
    fn test_price_looked_up_once_per_line_item() {
        let mut prices = MockTicketPriceLookupService::new();
        prices
            .expect_price_for()
            .with(eq(Adult))
            .times(2)
            .returning(|_| 25);
        let mut payment = MockTicketPaymentService::new();
        payment
            .expect_make_payment()
            .with(eq(ACCOUNT), eq(75))
            .times(1)
            .returning(|_, _| Ok(()));
        let mut reservation = MockSeatReservationService::new();
        reservation
            .expect_reserve_seat()
            .with(eq(ACCOUNT), eq(3))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = TicketServiceImpl::new(payment, reservation, prices);
        service
            .purchase_tickets(ACCOUNT, &[item(Adult, 1), item(Adult, 2)])
            .unwrap();
    }

    #[test]
    fn test_repeated_purchases_yield_identical_totals() {
        let items = [item(Adult, 2), item(Child, 3)];
        for _ in 0..2 {
            let service = expecting(95, 5);
            service.purchase_tickets(ACCOUNT, &items).unwrap();
        }
    }

    #[test]
    fn test_service_is_reusable_across_calls() {
        let mut payment = MockTicketPaymentService::new();
        payment
            .expect_make_payment()
            .with(eq(ACCOUNT), eq(25))
            .times(2)
            .returning(|_, _| Ok(()));
        let mut reservation = MockSeatReservationService::new();
        reservation
            .expect_reserve_seat()
            .with(eq(ACCOUNT), eq(1))
            .times(2)
            .returning(|_, _| Ok(()));

        let service = TicketServiceImpl::new(payment, reservation, standard_prices());
        let items = [item(Adult, 1)];
        service.purchase_tickets(ACCOUNT, &items).unwrap();
        service.purchase_tickets(ACCOUNT, &items).unwrap();
    }

    // -------------------------------------------------------------------------
    // Rejected purchases
    // -------------------------------------------------------------------------

    #[test]
    fn test_invalid_account_rejected() {
        init_tracing();
        let service = untouched_service();
        let msg = rejection(service.purchase_tickets(0, &[item(Adult, 1)]));
        assert_eq!(msg, "Account Id should be greater than zero");

        let msg = rejection(service.purchase(&PurchaseRequest {
            account_id: None,
            line_items: Some(&[item(Adult, 1)]),
        }));
        assert_eq!(msg, "Account Id should be greater than zero");
    }

    #[test]
    fn test_no_requests_rejected() {
        let service = untouched_service();
        let msg = rejection(service.purchase_tickets(ACCOUNT, &[]));
        assert_eq!(msg, "Requests array is null or empty");

        let msg = rejection(service.purchase(&PurchaseRequest {
            account_id: Some(ACCOUNT),
            line_items: None,
        }));
        assert_eq!(msg, "Requests array is null or empty");
    }

    #[test]
    fn test_too_many_line_items_rejected() {
        let service = untouched_service();
        let items: Vec<TicketLineItem> = (0..26).map(|_| item(Adult, 1)).collect();
        let msg = rejection(service.purchase_tickets(ACCOUNT, &items));
        assert_eq!(msg, "Too many tickets in purchase");
    }

    #[test]
    fn test_child_and_infant_only_rejected_with_other_errors() {
        let service = untouched_service();
        let items = [item(Child, 1), item(Infant, 1)];
        let msg = rejection(service.purchase_tickets(0, &items));
        assert!(msg.contains("Account Id should be greater than zero"));
        assert!(msg.contains("Infants or Child only purchase not allowed"));
    }

    #[test]
    fn test_not_enough_adults_for_infants() {
        let service = untouched_service();
        let items = [item(Infant, 2), item(Adult, 1)];
        let msg = rejection(service.purchase_tickets(ACCOUNT, &items));
        assert_eq!(msg, "Not enough adults for infants");
    }

    #[test]
    fn test_not_enough_adults_for_children() {
        let service = untouched_service();
        let items = [item(Child, 8), item(Adult, 1)];
        let msg = rejection(service.purchase_tickets(ACCOUNT, &items));
        assert!(msg.contains("Not enough adults for children"));
        assert!(msg.contains("1 adult per 7 children"));

        let items = [item(Child, 6), item(Infant, 1), item(Adult, 1)];
        let msg = rejection(service.purchase_tickets(ACCOUNT, &items));
        assert_eq!(
            msg,
            "Not enough adults for children (1 adult per 3 children when infants are present)"
        );
    }

    #[test]
    fn test_configured_limits_apply() {
        let service = untouched_service().with_limits(PurchaseLimits {
            max_purchase_tickets: 1,
            ..PurchaseLimits::default()
        });
        let items = [item(Adult, 1), item(Adult, 1)];
        let msg = rejection(service.purchase_tickets(ACCOUNT, &items));
        assert_eq!(msg, "Too many tickets in purchase");
    }

    #[test]
    fn test_totals_overflow_rejected_before_payment() {
        let mut payment = MockTicketPaymentService::new();
        payment.expect_make_payment().never();
        let mut reservation = MockSeatReservationService::new();
        reservation.expect_reserve_seat().never();

        let service = TicketServiceImpl::new(payment, reservation, standard_prices());
        let items = [item(Adult, u32::MAX)];
        let result = service.purchase_tickets(ACCOUNT, &items);
        assert!(matches!(
            result,
            Err(PurchaseError::Rejected(CoreError::TotalsOverflow))
        ));
    }

    // -------------------------------------------------------------------------
    // Gateway failures
    // -------------------------------------------------------------------------

    #[test]
    fn test_payment_failure_propagates_and_skips_reservation() {
        let mut payment = MockTicketPaymentService::new();
        payment
            .expect_make_payment()
            .times(1)
            .returning(|_, _| Err("card declined".into()));
        let mut reservation = MockSeatReservationService::new();
        reservation.expect_reserve_seat().never();

        let service = TicketServiceImpl::new(payment, reservation, standard_prices());
        let err = service
            .purchase_tickets(ACCOUNT, &[item(Adult, 1)])
            .unwrap_err();
        assert!(matches!(err, PurchaseError::Payment(_)));
        assert_eq!(err.to_string(), "card declined");
    }

    #[test]
    fn test_reservation_failure_propagates() {
        let mut payment = MockTicketPaymentService::new();
        payment
            .expect_make_payment()
            .times(1)
            .returning(|_, _| Ok(()));
        let mut reservation = MockSeatReservationService::new();
        reservation
            .expect_reserve_seat()
            .times(1)
            .returning(|_, _| Err("no seats left".into()));

        let service = TicketServiceImpl::new(payment, reservation, standard_prices());
        let err = service
            .purchase_tickets(ACCOUNT, &[item(Adult, 1)])
            .unwrap_err();
        assert!(matches!(err, PurchaseError::Reservation(_)));
        assert_eq!(err.to_string(), "no seats left");
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    #[test]
    fn test_from_config_uses_price_table() {
        let config = TicketsConfig {
            prices: PriceTable {
                adult: 30,
                child: 10,
                infant: 0,
            },
            ..TicketsConfig::default()
        };
        let mut payment = MockTicketPaymentService::new();
        payment
            .expect_make_payment()
            .with(eq(ACCOUNT), eq(50))
            .times(1)
            .returning(|_, _| Ok(()));
        let mut reservation = MockSeatReservationService::new();
        reservation
            .expect_reserve_seat()
            .with(eq(ACCOUNT), eq(3))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = TicketServiceImpl::from_config(payment, reservation, &config);
        assert_eq!(service.limits(), &PurchaseLimits::default());
        service
            .purchase_tickets(ACCOUNT, &[item(Adult, 1), item(Child, 2)])
            .unwrap();
    }

    // -------------------------------------------------------------------------
    // Sharing across threads
    // -------------------------------------------------------------------------

    struct AlwaysPays;

    impl TicketPaymentService for AlwaysPays {
        fn make_payment(&self, _: AccountId, _: u32) -> Result<(), CollaboratorError> {
            Ok(())
        }
    }

    struct AlwaysReserves;

    impl SeatReservationService for AlwaysReserves {
        fn reserve_seat(&self, _: AccountId, _: u32) -> Result<(), CollaboratorError> {
            Ok(())
        }
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_service_is_send_and_sync_with_thread_safe_gateways() {
        assert_send_sync::<TicketServiceImpl<AlwaysPays, AlwaysReserves, PriceTable>>();
    }

    #[test]
    fn test_concurrent_purchases_are_independent() {
        let config = TicketsConfig::default();
        let service = TicketServiceImpl::from_config(AlwaysPays, AlwaysReserves, &config);
        let items = [item(Adult, 2), item(Child, 1)];

        std::thread::scope(|scope| {
            let mut handles = Vec::new();
            for _ in 0..4 {
                handles.push(scope.spawn(|| service.purchase_tickets(ACCOUNT, &items)));
            }
            for handle in handles {
                assert!(handle.join().unwrap().is_ok());
            }
        });
    }
}
