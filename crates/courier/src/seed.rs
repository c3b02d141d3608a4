//! Demo fixtures: a known admin account, a customer, a driver account and
//! a small roster. Seeding goes through the ordinary service/client API so
//! it exercises exactly the code paths real callers use, and tests get
//! well-known identities to log in with (`admin@test.com` / `password123`).

use crate::driver_actor::DriverError;
use crate::lifecycle::CourierSystem;
use crate::model::{DriverCreate, DriverId, Role, UserId};
use crate::session::{AuthError, SignupRequest};
use thiserror::Error;

/// Identities created by [`load`].
#[derive(Debug, Clone)]
pub struct SeedData {
    pub admin: UserId,
    pub customer: UserId,
    pub driver_account: UserId,
    pub drivers: Vec<DriverId>,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seeding account failed: {0}")]
    Auth(#[from] AuthError),
    #[error("seeding roster failed: {0}")]
    Roster(#[from] DriverError),
}

/// Loads the demo accounts and roster into a freshly started system.
pub async fn load(system: &CourierSystem) -> Result<SeedData, SeedError> {
    let admin = system
        .session
        .signup(SignupRequest {
            email: "admin@test.com".into(),
            phone: "9000000001".into(),
            password: "password123".into(),
            name: "Anita Rao".into(),
            role: Some(Role::Admin),
            address: None,
            vehicle_number: None,
        })
        .await?
        .user
        .id;

    let customer = system
        .session
        .signup(SignupRequest {
            email: "customer@test.com".into(),
            phone: "9000000002".into(),
            password: "password123".into(),
            name: "Ravi Kumar".into(),
            role: None,
            address: Some("42 Lakeview Road, Indiranagar, Bengaluru".into()),
            vehicle_number: None,
        })
        .await?
        .user
        .id;

    let driver_account = system
        .session
        .signup(SignupRequest {
            email: "driver@test.com".into(),
            phone: "9000000003".into(),
            password: "password123".into(),
            name: "Suresh Yadav".into(),
            role: Some(Role::Driver),
            address: None,
            vehicle_number: Some("KA-01-AB-1234".into()),
        })
        .await?
        .user
        .id;

    let roster = [
        ("Suresh Yadav", "driver@test.com", "9000000003", "KA-01-AB-1234"),
        ("Manoj Pillai", "manoj@test.com", "9000000004", "KA-05-CD-5678"),
        ("Imran Shaikh", "imran@test.com", "9000000005", "MH-12-EF-9012"),
    ];
    let mut drivers = Vec::with_capacity(roster.len());
    for (name, email, phone, vehicle_number) in roster {
        let id = system
            .drivers
            .register_driver(DriverCreate {
                name: name.into(),
                email: email.into(),
                phone: phone.into(),
                vehicle_number: vehicle_number.into(),
            })
            .await?;
        drivers.push(id);
    }

    Ok(SeedData {
        admin,
        customer,
        driver_account,
        drivers,
    })
}
