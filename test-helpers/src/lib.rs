pub mod mock;
pub mod routes;
pub mod store;
pub mod telemetry;

use std::net::TcpListener;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use payloads::{
    AccommodationId, HotelApi, HotelId, RoomTypeId, requests, responses,
};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

use crate::store::Store;

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Read `IP_ADDRESS`, `PORT` and `ALLOWED_ORIGINS`, falling back to a
    /// local setup that accepts any origin.
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            ip: var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".into()),
            port: match var("PORT") {
                Ok(port) => port.parse()?,
                Err(_) => 8000,
            },
            allowed_origins,
        })
    }
}

/// Build the mock backend, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(config: &mut Config, store: Store) -> std::io::Result<Server> {
    let store = web::Data::new(Mutex::new(store));
    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        let cors = if allowed_origins.iter().any(|o| o == "*") {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
        } else {
            let mut cors =
                Cors::default().allow_any_method().allow_any_header();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .wrap(cors)
            .service(routes::api_services())
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct TestApp {
    pub port: u16,
    pub client: payloads::APIClient,
}

impl TestApp {
    pub async fn create_test_hotel(&self) -> anyhow::Result<payloads::Hotel> {
        self.create_hotel_named("Hotel Las Américas").await
    }

    /// Create a hotel and return it as listed by the backend.
    pub async fn create_hotel_named(
        &self,
        name: &str,
    ) -> anyhow::Result<payloads::Hotel> {
        let details = hotel_details_a(name);
        self.client.create_hotel(&details).await?;
        let hotel = self
            .client
            .list_hotels()
            .await?
            .into_iter()
            .rev()
            .find(|h| h.name == name)
            .ok_or_else(|| anyhow::anyhow!("created hotel not listed"))?;
        Ok(hotel)
    }

    pub async fn assignments(
        &self,
        hotel_id: HotelId,
    ) -> anyhow::Result<responses::HotelWithAssignments> {
        Ok(self.client.get_hotel_assignments(hotel_id).await?)
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
    };

    let server = build(&mut config, Store::default()).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient::new(format!(
            "http://127.0.0.1:{}/api",
            config.port
        )),
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

pub fn hotel_details_a(name: &str) -> requests::HotelDetails {
    requests::HotelDetails {
        name: name.to_string(),
        address: "Calle 72 # 10-34".to_string(),
        city: Some("Bogotá".to_string()),
        city_id: Some(payloads::CityId(1)),
        nit: "900123456-7".to_string(),
        max_rooms: 120,
    }
}

/// "Double" room type with the "King" accommodation from the seeded
/// catalogs.
pub fn double_king(quantity: u32) -> requests::HotelRoomDetails {
    requests::HotelRoomDetails {
        room_type_id: RoomTypeId(1),
        accommodation_id: AccommodationId(5),
        quantity,
    }
}
