//! Reading request documents and populating the catalogue.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use super::dto::{BaseRequest, RequestDocument};
use super::error::RequestError;
use crate::catalogue::TransportCatalogue;
use crate::domain::{CatalogueError, Coordinates};

/// Parse a request document from any reader.
pub fn read_document<R: Read>(reader: R) -> Result<RequestDocument, RequestError> {
    let document: RequestDocument = serde_json::from_reader(reader)?;
    debug!(
        base_requests = document.base_requests.len(),
        stat_requests = document.stat_requests.len(),
        "read request document"
    );
    Ok(document)
}

/// Parse a request document from a file.
pub fn load_document(path: impl AsRef<Path>) -> Result<RequestDocument, RequestError> {
    let file = File::open(path.as_ref())?;
    read_document(BufReader::new(file))
}

/// Build a catalogue from network definition records.
///
/// Records are applied in three passes regardless of their order in the
/// input: all stops, then all road distances, then all buses. A stop may
/// therefore list distances to stops defined after it, and a bus may list
/// stops defined after it.
pub fn build_catalogue(requests: &[BaseRequest]) -> Result<TransportCatalogue, CatalogueError> {
    let mut catalogue = TransportCatalogue::new();

    let stops: Vec<_> = requests
        .iter()
        .filter_map(|r| match r {
            BaseRequest::Stop(stop) => Some(stop),
            BaseRequest::Bus(_) => None,
        })
        .collect();

    for stop in &stops {
        catalogue.add_stop(
            stop.name.as_str(),
            Coordinates::new(stop.latitude, stop.longitude),
        )?;
    }

    for stop in &stops {
        for (neighbour, meters) in &stop.road_distances {
            catalogue.add_distance(&stop.name, neighbour, *meters)?;
        }
    }

    for request in requests {
        if let BaseRequest::Bus(bus) = request {
            catalogue.add_bus(bus.name.as_str(), bus.is_roundtrip, &bus.traversal())?;
        }
    }

    info!(
        stops = catalogue.stop_count(),
        buses = catalogue.buses().len(),
        "catalogue loaded"
    );
    Ok(catalogue)
}
