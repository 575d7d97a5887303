mod common;

use common::{backend, hotel_create, login_admin, login_hotel_user, room_create};
use mock_api::ErrorCode;

#[tokio::test]
async fn stats_and_dashboard_are_admin_only() {
    let (backend, _clock) = backend();

    let err = backend.reporting().stats().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::NoActiveSession);
    assert_eq!(err.status_code(), 401);

    login_hotel_user(&backend).await;
    let err = backend.reporting().stats().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::AdminRequired);
    let err = backend.reporting().dashboard().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::AdminRequired);
    assert_eq!(err.status_code(), 403);
}

#[tokio::test]
async fn stats_roll_up_the_seeded_data() {
    let (backend, _clock) = backend();
    login_admin(&backend).await;

    // Seed leaves one 4-star hotel with one room (5 available, 2 amenities):
    // 4 (volume) + 24 (stars) + 6 (amenities) = 34
    let stats = backend.reporting().stats().await.unwrap();
    assert_eq!(stats.total_hotels, 1);
    assert_eq!(stats.total_rooms, 5);
    assert_eq!(stats.average_score, 34);
    assert_eq!(stats.hotels_by_stars.four, 1);
    assert_eq!(stats.hotels_by_stars.three, 0);
    assert_eq!(stats.hotels_by_stars.five, 0);
}

#[tokio::test]
async fn average_score_is_a_rounded_mean() {
    let (backend, _clock) = backend();
    login_admin(&backend).await;

    // Second hotel with no rooms stays at score 0
    backend
        .hotels()
        .create(hotel_create("Vacío", 3))
        .await
        .unwrap();

    let stats = backend.reporting().stats().await.unwrap();
    assert_eq!(stats.total_hotels, 2);
    // round((34 + 0) / 2) = 17
    assert_eq!(stats.average_score, 17);
    assert_eq!(stats.hotels_by_stars.three, 1);
}

#[tokio::test]
async fn dashboard_ranks_and_distributes() {
    let (backend, _clock) = backend();
    login_admin(&backend).await;

    let second = backend
        .hotels()
        .create(hotel_create("Mar y Sol", 5))
        .await
        .unwrap();
    backend
        .rooms()
        .create(&second.id, room_create("Grande", 50, &[]))
        .await
        .unwrap();

    let dashboard = backend.reporting().dashboard().await.unwrap();
    assert_eq!(dashboard.total_hotels, 2);
    assert_eq!(dashboard.active_hotels, 2);
    assert_eq!(dashboard.total_rooms, 55);

    // 40 (saturated volume) + 30 (stars) + 0 (no amenities) = 70 beats 34
    assert_eq!(dashboard.top_hotels[0].hotel.id, second.id);
    assert_eq!(dashboard.top_hotels[0].rank, 1);
    assert_eq!(dashboard.top_hotels[0].score_percentage, 70);
    assert_eq!(dashboard.top_hotels[0].rating, 3.5);
    assert_eq!(dashboard.top_hotels[1].rank, 2);

    assert_eq!(dashboard.hotels_by_country.len(), 1);
    assert_eq!(dashboard.hotels_by_country[0].country, "Colombia");
    assert_eq!(dashboard.hotels_by_country[0].count, 2);
    assert_eq!(dashboard.hotels_by_country[0].percentage, 100);
}

#[tokio::test]
async fn hotels_without_score_are_not_active() {
    let (backend, _clock) = backend();
    login_admin(&backend).await;

    backend
        .hotels()
        .create(hotel_create("Sin Cuartos", 3))
        .await
        .unwrap();

    let dashboard = backend.reporting().dashboard().await.unwrap();
    assert_eq!(dashboard.total_hotels, 2);
    assert_eq!(dashboard.active_hotels, 1);
}
