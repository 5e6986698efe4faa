use quick_xml::events::Event;
use quick_xml::Reader;

use crate::domain::model::GeodesyObservation;
use crate::utils::error::{Result, ServiceError};

const FEATURE_LOCAL_NAME: &[u8] = b"station_observations";

#[derive(Debug, Clone, Copy)]
enum Field {
    StationId,
    Date,
    Url,
}

#[derive(Debug, Default)]
struct PartialObservation {
    station_id: Option<String>,
    date: Option<String>,
    url: Option<String>,
}

impl PartialObservation {
    fn append(&mut self, field: Field, text: &str) {
        let slot = match field {
            Field::StationId => &mut self.station_id,
            Field::Date => &mut self.date,
            Field::Url => &mut self.url,
        };
        slot.get_or_insert_with(String::new).push_str(text);
    }

    fn finish(self, index: usize) -> Result<GeodesyObservation> {
        let missing = |name: &str| {
            ServiceError::new(format!(
                "invalid WFS response: feature {} is missing {}",
                index, name
            ))
        };

        Ok(GeodesyObservation {
            station_id: self.station_id.ok_or_else(|| missing("station_id"))?,
            date: self.date.ok_or_else(|| missing("ob_date"))?,
            url: self.url.ok_or_else(|| missing("url"))?,
        })
    }
}

/// Stream-parse a WFS FeatureCollection into observation records.
///
/// Matches element local names only, so any namespace prefix bound to the
/// `station_observations` feature and its `station_id`/`ob_date`/`url`
/// children is accepted, and the OGC envelope around them is skipped.
/// Records come back in document order; a feature missing one of the three
/// fields is an error, a collection with no features is an empty list.
pub fn parse_station_observations(xml: &[u8]) -> Result<Vec<GeodesyObservation>> {
    let mut reader = Reader::from_reader(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut observations = Vec::new();
    let mut current: Option<PartialObservation> = None;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let local = e.local_name();
                if local.as_ref() == FEATURE_LOCAL_NAME {
                    current = Some(PartialObservation::default());
                    field = None;
                } else if current.is_some() {
                    field = match local.as_ref() {
                        b"station_id" => Some(Field::StationId),
                        b"ob_date" => Some(Field::Date),
                        b"url" => Some(Field::Url),
                        _ => None,
                    };
                }
            }
            Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == FEATURE_LOCAL_NAME {
                    return Err(ServiceError::new(format!(
                        "invalid WFS response: feature {} has no fields",
                        observations.len() + 1
                    )));
                }
            }
            Ok(Event::Text(t)) => {
                if let (Some(obs), Some(f)) = (current.as_mut(), field) {
                    let text = t.unescape().map_err(|e| {
                        ServiceError::parse(
                            format!("bad text at position {}", reader.buffer_position()),
                            e,
                        )
                    })?;
                    obs.append(f, &text);
                }
            }
            Ok(Event::CData(t)) => {
                if let (Some(obs), Some(f)) = (current.as_mut(), field) {
                    obs.append(f, &String::from_utf8_lossy(&t.into_inner()));
                }
            }
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == FEATURE_LOCAL_NAME {
                    let partial = current.take().unwrap_or_default();
                    observations.push(partial.finish(observations.len() + 1)?);
                }
                field = None;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ServiceError::parse(
                    format!("XML error at position {}", reader.buffer_position()),
                    e,
                ));
            }
            _ => {}
        }
        buf.clear();
    }

    if current.is_some() {
        return Err(ServiceError::new(
            "invalid WFS response: document ended inside a feature",
        ));
    }

    Ok(observations)
}
