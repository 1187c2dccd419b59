// ABOUTME: Docker CLI command lines.
// ABOUTME: Daemon probe, image inspect, build, tag, and push.

use crate::process::CommandLine;
use crate::types::ImageRef;

const DOCKER: &str = "docker";

/// Build context passed to `docker build`.
pub const BUILD_CONTEXT: &str = ".";

/// Succeeds only when the daemon answers.
pub fn info() -> CommandLine {
    CommandLine::new(DOCKER).arg("info")
}

pub fn image_inspect(image: &ImageRef) -> CommandLine {
    CommandLine::new(DOCKER).args(["image", "inspect"]).arg(image.to_string())
}

pub fn build(image: &ImageRef) -> CommandLine {
    CommandLine::new(DOCKER)
        .args(["build", "-t"])
        .arg(image.to_string())
        .arg(BUILD_CONTEXT)
        .inherit_stdio()
}

pub fn tag(source: &ImageRef, target: &ImageRef) -> CommandLine {
    CommandLine::new(DOCKER)
        .arg("tag")
        .arg(source.to_string())
        .arg(target.to_string())
}

pub fn push(image: &ImageRef) -> CommandLine {
    CommandLine::new(DOCKER)
        .arg("push")
        .arg(image.to_string())
        .inherit_stdio()
}
