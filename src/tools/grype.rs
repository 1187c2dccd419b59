// ABOUTME: Grype vulnerability scanner command line.
// ABOUTME: Scans a local image and reports findings grouped by CVE.

use crate::process::CommandLine;
use crate::types::ImageRef;

pub fn scan(image: &ImageRef) -> CommandLine {
    CommandLine::new("grype")
        .arg(image.to_string())
        .arg("--by-cve")
        .inherit_stdio()
}
