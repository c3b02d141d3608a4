//! Walks one parcel through the whole system: seeded accounts, a customer
//! login, order placement, driver assignment, shipping, proof of delivery,
//! and the dashboard numbers an admin would see at the end.

use courier::lifecycle::{setup_tracing, CourierSystem};
use courier::model::{DeliveryType, OrderCreate, OrderStatus, PaymentMethod};
use courier::query::Viewer;
use courier::{pricing, validate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting courier system");

    let (system, seed) = CourierSystem::with_seed_data()
        .await
        .map_err(|e| e.to_string())?;

    // Log in as the seeded customer
    let span = tracing::info_span!("customer_login");
    let session = async {
        info!("Logging in seeded customer");
        system
            .session
            .login("customer@test.com", "password123")
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(user_id = %session.user.id, "Customer logged in");

    // Place an order the way the app would: validate the address, derive
    // the amount from the delivery type.
    let address = "123 Main St, Springfield".to_string();
    if !validate::address(&address) {
        return Err("Delivery address is too short".to_string());
    }
    let delivery_type = DeliveryType::Express;

    let span = tracing::info_span!("order_placement");
    let order_id = async {
        info!("Placing order");
        system
            .orders
            .create_order(OrderCreate {
                customer_id: session.user.id,
                customer_name: session.user.name.clone(),
                address,
                delivery_type,
                payment_method: PaymentMethod::Upi,
                amount: pricing::base_amount(delivery_type),
                package_details: "Books, 2kg".to_string(),
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(order_id = %order_id, "Order placed");

    // Dispatch: assign a driver from the seeded roster, ship, deliver.
    let span = tracing::info_span!("dispatch");
    let delivery = async {
        let driver_id = *seed.drivers.first().ok_or("Seed roster is empty")?;
        info!(driver_id = %driver_id, "Assigning driver");
        let order = system
            .orders
            .assign_driver(order_id, driver_id)
            .await
            .map_err(|e| e.to_string())?;
        info!(driver = ?order.driver, "Driver assigned");

        system
            .orders
            .update_status(order_id, OrderStatus::Shipped)
            .await
            .map_err(|e| e.to_string())?;
        info!("Order shipped");

        system
            .orders
            .attach_proof(order_id, "file:///proof/receipt.jpg".to_string())
            .await
            .map_err(|e| e.to_string())?;

        system
            .orders
            .update_status(order_id, OrderStatus::Delivered)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await;

    match delivery {
        Ok(order) => info!(status = %order.status, "Order delivered"),
        Err(e) => error!(error = %e, "Delivery flow failed"),
    }

    // The admin's view at the end of the day.
    let admin = system
        .session
        .login("admin@test.com", "password123")
        .await
        .map_err(|e| e.to_string())?;
    info!(user_id = %admin.user.id, "Admin logged in");
    let stats = system
        .query
        .dashboard_stats(Viewer::Admin)
        .await
        .map_err(|e| e.to_string())?;
    info!(
        total = stats.total,
        placed = stats.placed,
        shipped = stats.shipped,
        delivered = stats.delivered,
        "Dashboard"
    );

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
