//! Share services: host-registered export destinations.
//!
//! Each service handles one or more output formats. The editor only
//! enumerates services to fill the per-format dropdowns and invokes the
//! chosen one's `run`; the export itself happens on the host side and its
//! result is not interpreted here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Output formats offered by the export button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Gif,
    Mp4,
    Webm,
    Apng,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Gif, Format::Mp4, Format::Webm, Format::Apng];

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Gif => "gif",
            Format::Mp4 => "mp4",
            Format::Webm => "webm",
            Format::Apng => "apng",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a share service needs to perform an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub format: Format,
    pub file_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    #[serde(rename = "loop")]
    pub loop_playback: bool,
}

type RunFn = Box<dyn Fn(&ExportRequest) + Send + Sync>;

/// A single export destination.
pub struct ShareService {
    title: String,
    formats: Vec<Format>,
    run: RunFn,
}

impl ShareService {
    pub fn new(
        title: impl Into<String>,
        formats: Vec<Format>,
        run: impl Fn(&ExportRequest) + Send + Sync + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            formats,
            run: Box::new(run),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn supports(&self, format: Format) -> bool {
        self.formats.contains(&format)
    }

    /// Hand the request to the service. Fire-and-forget.
    pub fn run(&self, request: &ExportRequest) {
        log::info!(
            "Running share service '{}' for {} export of {}",
            self.title,
            request.format,
            request.file_path.display()
        );
        (self.run)(request);
    }
}

impl fmt::Debug for ShareService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShareService")
            .field("title", &self.title)
            .field("formats", &self.formats)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of share services, queried once at startup.
#[derive(Debug, Default)]
pub struct ShareRegistry {
    services: Vec<ShareService>,
}

impl ShareRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, service: ShareService) {
        self.services.push(service);
    }

    /// Services handling `format`, in registration order. The position in
    /// this iteration is the dropdown value (0..k-1).
    pub fn supporting(&self, format: Format) -> impl Iterator<Item = &ShareService> {
        self.services.iter().filter(move |s| s.supports(format))
    }

    /// Resolve a dropdown selection back to its service.
    pub fn service_for(&self, format: Format, index: usize) -> Option<&ShareService> {
        self.supporting(format).nth(index)
    }

    /// Dropdown entries for one export button.
    pub fn choices(&self, format: Format) -> Vec<ServiceChoice> {
        self.supporting(format)
            .enumerate()
            .map(|(index, service)| ServiceChoice {
                index,
                title: service.title().to_string(),
            })
            .collect()
    }
}

/// One dropdown option: a service's title, valued by its position among the
/// services supporting that format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceChoice {
    pub index: usize,
    pub title: String,
}

impl fmt::Display for ServiceChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn registry() -> ShareRegistry {
        let mut reg = ShareRegistry::new();
        reg.register(ShareService::new(
            "Save to Disk",
            vec![Format::Gif, Format::Mp4, Format::Webm, Format::Apng],
            |_| {},
        ));
        reg.register(ShareService::new(
            "Copy to Clipboard",
            vec![Format::Gif, Format::Apng],
            |_| {},
        ));
        reg.register(ShareService::new(
            "Upload",
            vec![Format::Mp4, Format::Webm],
            |_| {},
        ));
        reg
    }

    #[test]
    fn choices_list_supporting_services_in_order() {
        let reg = registry();
        let gif = reg.choices(Format::Gif);
        assert_eq!(gif.len(), 2);
        assert_eq!(gif[0].title, "Save to Disk");
        assert_eq!(gif[0].index, 0);
        assert_eq!(gif[1].title, "Copy to Clipboard");
        assert_eq!(gif[1].index, 1);

        let mp4 = reg.choices(Format::Mp4);
        assert_eq!(mp4.len(), 2);
        assert_eq!(mp4[1].title, "Upload");
    }

    #[test]
    fn choices_exclude_non_supporting_services() {
        let reg = registry();
        let webm: Vec<_> = reg.choices(Format::Webm);
        assert!(webm.iter().all(|c| c.title != "Copy to Clipboard"));
    }

    #[test]
    fn service_for_resolves_dropdown_index() {
        let reg = registry();
        let service = reg.service_for(Format::Apng, 1).unwrap();
        assert_eq!(service.title(), "Copy to Clipboard");
        assert!(reg.service_for(Format::Apng, 2).is_none());
    }

    #[test]
    fn run_delegates_the_request() {
        let seen: Arc<Mutex<Vec<ExportRequest>>> = Arc::default();
        let sink = seen.clone();
        let service = ShareService::new("Recorder", vec![Format::Gif], move |req| {
            sink.lock().unwrap().push(req.clone());
        });

        let request = ExportRequest {
            format: Format::Gif,
            file_path: PathBuf::from("/tmp/recording.mp4"),
            width: 960,
            height: 540,
            fps: 15,
            loop_playback: true,
        };
        service.run(&request);

        assert_eq!(seen.lock().unwrap().as_slice(), &[request]);
    }
}
