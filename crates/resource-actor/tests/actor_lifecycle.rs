use async_trait::async_trait;
use resource_actor::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Shipment {
    id: u32,
    destination: String,
    dispatched: bool,
}

#[derive(Debug)]
struct ShipmentCreate {
    destination: String,
}

#[derive(Debug)]
struct ShipmentUpdate {
    destination: Option<String>,
}

#[derive(Debug)]
enum ShipmentAction {
    Dispatch,
}

#[derive(Debug)]
enum ShipmentFilter {
    All,
    Dispatched,
}

#[derive(Debug, thiserror::Error)]
enum ShipmentError {
    #[error("shipment already dispatched")]
    AlreadyDispatched,
}

#[async_trait]
impl ActorEntity for Shipment {
    type Id = u32;
    type Create = ShipmentCreate;
    type Update = ShipmentUpdate;
    type Action = ShipmentAction;
    type ActionResult = bool;
    type Filter = ShipmentFilter;
    type Context = ();
    type Error = ShipmentError;

    fn from_create_params(id: u32, params: ShipmentCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            destination: params.destination,
            dispatched: false,
        })
    }

    fn id(&self) -> &u32 {
        &self.id
    }

    fn matches(&self, filter: &ShipmentFilter) -> bool {
        match filter {
            ShipmentFilter::All => true,
            ShipmentFilter::Dispatched => self.dispatched,
        }
    }

    async fn on_update(
        &mut self,
        update: ShipmentUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(destination) = update.destination {
            self.destination = destination;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ShipmentAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            ShipmentAction::Dispatch => {
                if self.dispatched {
                    Err(ShipmentError::AlreadyDispatched)
                } else {
                    self.dispatched = true;
                    Ok(true)
                }
            }
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    // Create
    let id: u32 = client
        .create(ShipmentCreate {
            destination: "Springfield".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1); // first ID is 1

    // Action mutates state
    let changed: bool = client
        .perform_action(id, ShipmentAction::Dispatch)
        .await
        .unwrap();
    assert!(changed);

    let shipment: Shipment = client.get(id).await.unwrap().unwrap();
    assert!(shipment.dispatched);

    // Action error propagates as EntityError and leaves state intact
    let again = client.perform_action(id, ShipmentAction::Dispatch).await;
    assert!(matches!(again, Err(FrameworkError::EntityError(_))));

    // Update
    let updated = client
        .update(
            id,
            ShipmentUpdate {
                destination: Some("Shelbyville".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.destination, "Shelbyville");

    // Delete, then Get returns None
    client.delete(id).await.unwrap();
    let deleted = client.get(id).await.unwrap();
    assert!(deleted.is_none());
}

#[tokio::test]
async fn list_is_filtered_and_in_insertion_order() {
    let (actor, client) = ResourceActor::<Shipment>::new(10);
    tokio::spawn(actor.run(()));

    for destination in ["Ogdenville", "North Haverbrook", "Brockway"] {
        client
            .create(ShipmentCreate {
                destination: destination.into(),
            })
            .await
            .unwrap();
    }

    // Dispatch the second one only
    client
        .perform_action(2, ShipmentAction::Dispatch)
        .await
        .unwrap();

    let all = client.list(ShipmentFilter::All).await.unwrap();
    assert_eq!(all.len(), 3);
    let destinations: Vec<&str> = all.iter().map(|s| s.destination.as_str()).collect();
    assert_eq!(
        destinations,
        vec!["Ogdenville", "North Haverbrook", "Brockway"]
    );

    let dispatched = client.list(ShipmentFilter::Dispatched).await.unwrap();
    assert_eq!(dispatched.len(), 1);
    assert_eq!(dispatched[0].destination, "North Haverbrook");
}

#[tokio::test]
async fn missing_ids_fail_with_not_found() {
    let (actor, client) = ResourceActor::<Shipment>::new(10);
    tokio::spawn(actor.run(()));

    let get = client.get(99).await.unwrap();
    assert!(get.is_none());

    let update = client
        .update(99, ShipmentUpdate { destination: None })
        .await;
    assert!(matches!(update, Err(FrameworkError::NotFound(_))));

    let delete = client.delete(99).await;
    assert!(matches!(delete, Err(FrameworkError::NotFound(_))));

    let action = client.perform_action(99, ShipmentAction::Dispatch).await;
    assert!(matches!(action, Err(FrameworkError::NotFound(_))));
}

#[tokio::test]
async fn shutdown_when_clients_drop() {
    let (actor, client) = ResourceActor::<Shipment>::new(10);
    let handle = tokio::spawn(actor.run(()));

    client
        .create(ShipmentCreate {
            destination: "Capital City".into(),
        })
        .await
        .unwrap();

    drop(client);
    handle.await.unwrap();
}
