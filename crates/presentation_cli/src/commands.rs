//! Command execution

use std::time::Duration;

use anyhow::Context;
use serde_json::Value;
use smapp_core::{ClientOptions, Config, GeoPoint};
use tracing::info;

use crate::cli::{Commands, GatewaysLanguage, SearchCommands, SearchScope};

/// Run a command against the services and return its result as JSON
pub async fn run(command: Commands, config: &Config, timeout: Duration) -> anyhow::Result<Value> {
    match command {
        Commands::Reverse {
            point,
            display_name,
            structural,
            language,
            response_type,
            zoom,
        } => {
            let client = service_reverse::ReverseClient::new(
                config,
                service_reverse::Version::V1,
                timeout,
                ClientOptions::new(),
            )?;
            let mut options = service_reverse::CallOptions::new();
            if let Some(language) = language {
                options = options.with_language(language.into());
            }
            if let Some(response_type) = response_type {
                options = options.with_response_type(response_type.into());
            }
            if let Some(zoom) = zoom {
                options = options.with_zoom_level(zoom);
            }

            info!(%point, display_name, structural, "Reverse geocoding");
            if display_name {
                let name = client
                    .get_display_name(point.lat, point.lon, &options)
                    .await
                    .context("reverse display name failed")?;
                Ok(Value::String(name))
            } else if structural {
                let result = client
                    .get_structural_result(point.lat, point.lon, &options)
                    .await
                    .context("reverse structural lookup failed")?;
                Ok(serde_json::to_value(result)?)
            } else {
                let components = client
                    .get_components(point.lat, point.lon, &options)
                    .await
                    .context("reverse components failed")?;
                Ok(serde_json::to_value(components)?)
            }
        },

        Commands::Search { command } => run_search(command, config, timeout).await,

        Commands::Eta {
            points,
            engine,
            no_traffic,
            departure,
            path,
        } => {
            let client = service_eta::EtaClient::new(
                config,
                service_eta::Version::V1,
                timeout,
                ClientOptions::new().with_path_style(path.style()),
            )?;
            let mut options = service_eta::CallOptions::new().with_engine(engine.into());
            if no_traffic {
                options = options.with_no_traffic();
            }
            if let Some(departure) = departure {
                options = options.with_departure_date_time(departure);
            }

            let points: Vec<_> = points
                .iter()
                .map(|p| service_eta::Point::new(p.lat, p.lon))
                .collect();
            info!(points = points.len(), "Estimating travel time");
            let eta = client
                .get_eta(&points, &options)
                .await
                .context("eta request failed")?;
            Ok(serde_json::to_value(eta)?)
        },

        Commands::Matrix {
            sources,
            targets,
            engine,
            v2,
            no_traffic,
            post,
            path,
        } => {
            let version = if v2 {
                service_matrix::Version::V2
            } else {
                service_matrix::Version::V1
            };
            let client = service_matrix::MatrixClient::new(
                config,
                version,
                timeout,
                ClientOptions::new().with_path_style(path.style()),
            )?;
            let mut options =
                service_matrix::CallOptions::new().with_engine(engine.as_str().into());
            if no_traffic {
                options = options.with_no_traffic();
            }
            if post {
                options = options.with_post();
            }

            info!(sources = sources.len(), targets = targets.len(), "Computing matrix");
            let output = client
                .get_matrix(&sources, &targets, &options)
                .await
                .context("matrix request failed")?;
            Ok(serde_json::to_value(output)?)
        },

        Commands::Locate { points } => {
            let client = service_locate::LocateClient::new(
                config,
                service_locate::Version::V1,
                timeout,
                ClientOptions::new(),
            )?;
            let results = client
                .locate_points(&points, &service_locate::CallOptions::new())
                .await
                .context("locate request failed")?;
            Ok(serde_json::to_value(results)?)
        },

        Commands::Gateways { point, language } => {
            let client = service_area_gateways::AreaGatewaysClient::new(
                config,
                service_area_gateways::Version::V1,
                timeout,
                ClientOptions::new(),
            )?;
            let options = match language {
                Some(GatewaysLanguage::Fa) => {
                    service_area_gateways::CallOptions::new().with_farsi_language()
                },
                Some(GatewaysLanguage::En) => {
                    service_area_gateways::CallOptions::new().with_english_language()
                },
                None => service_area_gateways::CallOptions::new(),
            };
            let area = client
                .get_gateways(point.lat, point.lon, &options)
                .await
                .context("area gateways request failed")?;
            Ok(serde_json::to_value(area)?)
        },
    }
}

async fn run_search(
    command: SearchCommands,
    config: &Config,
    timeout: Duration,
) -> anyhow::Result<Value> {
    let client = service_search::SearchClient::new(
        config,
        service_search::Version::V1,
        timeout,
        ClientOptions::new(),
    )?;

    match command {
        SearchCommands::Cities { scope } => {
            let cities = client
                .get_cities(&search_options(&scope))
                .await
                .context("city list failed")?;
            Ok(serde_json::to_value(cities)?)
        },
        SearchCommands::City { input, scope } => {
            let cities = client
                .search_city(&input, &search_options(&scope))
                .await
                .context("city search failed")?;
            Ok(serde_json::to_value(cities)?)
        },
        SearchCommands::Autocomplete {
            input,
            user_location,
            city_id,
            scope,
        } => {
            let mut options = search_options(&scope);
            if let Some(GeoPoint { lat, lon }) = user_location {
                options = options.with_user_location(lat, lon);
            }
            if let Some(city_id) = city_id {
                options = options.with_city_id(city_id);
            }
            let results = client
                .auto_complete(&input, &options)
                .await
                .context("autocomplete failed")?;
            Ok(serde_json::to_value(results)?)
        },
        SearchCommands::Details { place_id, scope } => {
            let detail = client
                .details(&place_id, &search_options(&scope))
                .await
                .context("place details failed")?;
            Ok(serde_json::to_value(detail)?)
        },
    }
}

fn search_options(scope: &SearchScope) -> service_search::CallOptions {
    let mut options = service_search::CallOptions::new();
    if let Some(GeoPoint { lat, lon }) = scope.location {
        options = options.with_location(lat, lon);
    }
    if let Some(language) = scope.language {
        options = options.with_language(language.into());
    }
    options
}
