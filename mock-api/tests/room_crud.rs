mod common;

use common::{backend, hotel_create, login_admin};
use mock_api::ErrorCode;
use shared::models::{Hotel, RoomCreate, RoomType, RoomUpdate};

async fn hotel(backend: &mock_api::Backend, stars: u8) -> Hotel {
    backend
        .hotels()
        .create(hotel_create("Rooms Inc", stars))
        .await
        .unwrap()
}

fn room(room_type: RoomType, available: u32) -> RoomCreate {
    RoomCreate {
        name: "Room".to_string(),
        room_type,
        price: 80.0,
        available,
        description: None,
        images: None,
        amenities: None,
    }
}

#[tokio::test]
async fn create_requires_an_existing_hotel() {
    let (backend, _clock) = backend();
    login_admin(&backend).await;

    let err = backend
        .rooms()
        .create("hotel-nope", room(RoomType::Single, 1))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::HotelNotFound);
}

#[tokio::test]
async fn create_requires_a_session() {
    let (backend, _clock) = backend();

    let err = backend
        .rooms()
        .create("hotel-any", room(RoomType::Single, 1))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NoActiveSession);
    assert_eq!(err.status_code(), 401);
}

#[tokio::test]
async fn create_validates_name_available_and_price() {
    let (backend, _clock) = backend();
    login_admin(&backend).await;
    let hotel = hotel(&backend, 3).await;

    let mut blank_name = room(RoomType::Single, 1);
    blank_name.name = "  ".to_string();
    let err = backend.rooms().create(&hotel.id, blank_name).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);

    let err = backend
        .rooms()
        .create(&hotel.id, room(RoomType::Single, 0))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let mut free_room = room(RoomType::Single, 1);
    free_room.price = 0.0;
    let err = backend.rooms().create(&hotel.id, free_room).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn capacity_is_always_derived_from_type() {
    let (backend, _clock) = backend();
    login_admin(&backend).await;
    let hotel = hotel(&backend, 3).await;

    let single = backend
        .rooms()
        .create(&hotel.id, room(RoomType::Single, 1))
        .await
        .unwrap();
    assert_eq!(single.capacity, 1);

    let twin = backend
        .rooms()
        .create(&hotel.id, room(RoomType::Twin, 1))
        .await
        .unwrap();
    assert_eq!(twin.capacity, 2);

    let queen = backend
        .rooms()
        .create(&hotel.id, room(RoomType::Queen, 1))
        .await
        .unwrap();
    assert_eq!(queen.capacity, 2);

    // Changing the type re-derives capacity
    let updated = backend
        .rooms()
        .update(
            &queen.id,
            RoomUpdate {
                room_type: Some(RoomType::Single),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.capacity, 1);
}

#[tokio::test]
async fn unknown_amenities_are_dropped_silently() {
    let (backend, _clock) = backend();
    login_admin(&backend).await;
    let hotel = hotel(&backend, 3).await;

    let mut data = room(RoomType::Twin, 1);
    data.amenities = Some(vec![
        "WiFi".to_string(),
        "Jacuzzi de Oro".to_string(),
        " Minibar ".to_string(),
    ]);
    let created = backend.rooms().create(&hotel.id, data).await.unwrap();
    assert_eq!(created.amenities, vec!["WiFi", "Minibar"]);

    let updated = backend
        .rooms()
        .update(
            &created.id,
            RoomUpdate {
                amenities: Some(vec!["Desk".to_string(), "Helipad".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.amenities, vec!["Desk"]);
}

#[tokio::test]
async fn room_mutations_keep_the_hotel_score_fresh() {
    let (backend, _clock) = backend();
    login_admin(&backend).await;
    let hotel = hotel(&backend, 5).await;
    assert_eq!(hotel.score, 0);

    let mut data = room(RoomType::Twin, 10);
    data.amenities = Some(vec![
        "WiFi".to_string(),
        "Smart TV".to_string(),
        "Minibar".to_string(),
        "Safe".to_string(),
        "Desk".to_string(),
    ]);
    let created = backend.rooms().create(&hotel.id, data).await.unwrap();

    // min(10/50,1)*40 + 5/5*30 + min(5/10,1)*30 = 8 + 30 + 15
    assert_eq!(backend.hotels().get(&hotel.id).await.unwrap().score, 53);

    backend
        .rooms()
        .update(
            &created.id,
            RoomUpdate {
                available: Some(50),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    // Volume term saturates at 40
    assert_eq!(backend.hotels().get(&hotel.id).await.unwrap().score, 85);

    backend.rooms().delete(&created.id).await.unwrap();
    // Only the star term remains
    assert_eq!(backend.hotels().get(&hotel.id).await.unwrap().score, 30);
}

#[tokio::test]
async fn update_and_delete_of_missing_room_are_404() {
    let (backend, _clock) = backend();
    login_admin(&backend).await;

    let err = backend
        .rooms()
        .update("room-nope", RoomUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::RoomNotFound);

    let err = backend.rooms().delete("room-nope").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::RoomNotFound);
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn list_by_hotel_filters_rooms() {
    let (backend, _clock) = backend();
    login_admin(&backend).await;

    let first = hotel(&backend, 3).await;
    let second = backend
        .hotels()
        .create(hotel_create("Other", 3))
        .await
        .unwrap();
    backend
        .rooms()
        .create(&first.id, room(RoomType::Single, 1))
        .await
        .unwrap();
    backend
        .rooms()
        .create(&second.id, room(RoomType::Twin, 2))
        .await
        .unwrap();

    let rooms = backend.rooms().list_by_hotel(&first.id).await.unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].room_type, RoomType::Single);
}
