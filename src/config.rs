use log::LevelFilter;

use crate::shader::CrtParams;

/// Demo configuration.
///
/// Defaults match the stock page; a query string such as
/// `?warp=0.5&scan=0.2&dpr=2&log=debug` can override individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Element id of the canvas to draw into.
    pub canvas_id: String,
    pub params: CrtParams,
    /// Multiplier from CSS pixels to drawing-buffer pixels.
    pub pixel_ratio: f64,
    pub log_level: LevelFilter,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            canvas_id: "canvas".to_owned(),
            params: CrtParams::default(),
            pixel_ratio: 1.0,
            log_level: LevelFilter::Info,
        }
    }
}

const MIN_PIXEL_RATIO: f64 = 0.25;
const MAX_PIXEL_RATIO: f64 = 4.0;

impl DemoConfig {
    /// Applies `key=value` pairs from a URL query string.
    ///
    /// A leading `?` is accepted. Unknown keys and unparsable values are
    /// skipped and returned, so they can be reported once the log level from
    /// the same query is in effect.
    #[must_use]
    pub fn apply_query<'q>(&mut self, query: &'q str) -> Vec<&'q str> {
        let query = query.strip_prefix('?').unwrap_or(query);
        query
            .split('&')
            .filter(|p| !p.is_empty())
            .filter(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((*pair, ""));
                !self.apply(key, value)
            })
            .collect()
    }

    /// Applies one override; returns `false` when it was not recognized or not valid.
    pub fn apply(&mut self, key: &str, value: &str) -> bool {
        match key {
            "warp" => match value.parse().ok().and_then(CrtParams::sanitize) {
                Some(v) => self.params.warp = v,
                None => return false,
            },
            "scan" => match value.parse().ok().and_then(CrtParams::sanitize) {
                Some(v) => self.params.scan = v,
                None => return false,
            },
            "dpr" => match value.parse::<f64>() {
                Ok(v) if v.is_finite() && v > 0.0 => {
                    self.pixel_ratio = v.clamp(MIN_PIXEL_RATIO, MAX_PIXEL_RATIO)
                }
                _ => return false,
            },
            "log" => match value.parse() {
                Ok(level) => self.log_level = level,
                Err(_) => return false,
            },
            _ => return false,
        }
        true
    }
}
