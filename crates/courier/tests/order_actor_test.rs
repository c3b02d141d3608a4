//! The order actor against a mocked roster: a real actor task, real
//! transition checking, but driver lookups answered from an expectation
//! queue instead of a second actor.

use courier::clients::DriverClient;
use courier::model::{
    DeliveryType, Driver, DriverId, OrderCreate, OrderStatus, PaymentMethod, UserId,
};
use courier::order_actor::{self, OrderError};
use resource_actor::mock::MockClient;
use resource_actor::ActorClient;

fn params() -> OrderCreate {
    OrderCreate {
        customer_id: UserId(1),
        customer_name: "Ravi Kumar".to_string(),
        address: "123 Main St, Springfield".to_string(),
        delivery_type: DeliveryType::Standard,
        payment_method: PaymentMethod::Cod,
        amount: 99,
        package_details: "Documents".to_string(),
    }
}

fn roster_driver(id: u32, name: &str) -> Driver {
    Driver {
        id: DriverId(id),
        name: name.to_string(),
        email: "driver@test.com".to_string(),
        phone: "9000000003".to_string(),
        vehicle_number: "KA-01-AB-1234".to_string(),
    }
}

#[tokio::test]
async fn assignment_resolves_the_driver_through_the_roster() {
    let mut roster = MockClient::<Driver>::new();
    roster
        .expect_get(DriverId(2))
        .return_ok(Some(roster_driver(2, "Manoj Pillai")));

    let (actor, orders) = order_actor::new();
    let handle = tokio::spawn(actor.run(DriverClient::new(roster.client())));

    let id = orders.create_order(params()).await.unwrap();
    let order = orders.assign_driver(id, DriverId(2)).await.unwrap();

    let driver = order.driver.expect("Driver not recorded");
    assert_eq!(driver.id, DriverId(2));
    assert_eq!(driver.name, "Manoj Pillai");
    roster.verify();

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn assignment_to_missing_driver_leaves_order_unmutated() {
    let mut roster = MockClient::<Driver>::new();
    roster.expect_get(DriverId(9)).return_ok(None);

    let (actor, orders) = order_actor::new();
    let handle = tokio::spawn(actor.run(DriverClient::new(roster.client())));

    let id = orders.create_order(params()).await.unwrap();
    let before = orders.get(id).await.unwrap().unwrap();

    let result = orders.assign_driver(id, DriverId(9)).await;
    assert_eq!(result, Err(OrderError::DriverNotFound("driver_9".into())));

    let after = orders.get(id).await.unwrap().unwrap();
    assert!(after.driver.is_none());
    assert_eq!(after.updated_at, before.updated_at, "Failed action must not touch the order");
    roster.verify();

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn reassignment_overwrites_the_previous_driver() {
    let mut roster = MockClient::<Driver>::new();
    roster
        .expect_get(DriverId(1))
        .return_ok(Some(roster_driver(1, "Suresh Yadav")));
    roster
        .expect_get(DriverId(2))
        .return_ok(Some(roster_driver(2, "Manoj Pillai")));

    let (actor, orders) = order_actor::new();
    let handle = tokio::spawn(actor.run(DriverClient::new(roster.client())));

    let id = orders.create_order(params()).await.unwrap();
    orders.assign_driver(id, DriverId(1)).await.unwrap();
    let order = orders.assign_driver(id, DriverId(2)).await.unwrap();

    let driver = order.driver.expect("Driver not recorded");
    assert_eq!(driver.id, DriverId(2));
    assert_eq!(driver.name, "Manoj Pillai");
    roster.verify();

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn status_and_proof_never_touch_the_roster() {
    // No expectations queued: any roster call would panic the mock task.
    let roster = MockClient::<Driver>::new();

    let (actor, orders) = order_actor::new();
    let handle = tokio::spawn(actor.run(DriverClient::new(roster.client())));

    let id = orders.create_order(params()).await.unwrap();
    let order = orders
        .update_status(id, OrderStatus::Shipped)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Shipped);

    let order = orders
        .attach_proof(id, "file:///proof/receipt.jpg".to_string())
        .await
        .unwrap();
    assert_eq!(order.proof_image_uri.as_deref(), Some("file:///proof/receipt.jpg"));
    assert_eq!(order.status, OrderStatus::Shipped);
    roster.verify();

    drop(orders);
    handle.await.unwrap();
}
