// ABOUTME: Test support utilities.
// ABOUTME: Scripted operator answers and a recording process runner for pipeline tests.

use async_trait::async_trait;
use azdeploy::config::DeploymentConfig;
use azdeploy::error::Result;
use azdeploy::interaction::Interaction;
use azdeploy::output::{Output, OutputMode};
use azdeploy::process::{CommandLine, ProcessError, ProcessOutput, ProcessRunner};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("azdeploy=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Output that stays out of the way of test logs.
#[allow(dead_code)]
pub fn quiet_output() -> Output {
    Output::new(OutputMode::Quiet)
}

/// A valid configuration: image `myapp:v1`, registry `myacr`, container `hello`.
#[allow(dead_code)]
pub fn test_config() -> DeploymentConfig {
    let vars = test_vars();
    DeploymentConfig::from_lookup(|k| vars.get(k).cloned()).unwrap()
}

#[allow(dead_code)]
pub fn test_vars() -> HashMap<String, String> {
    [
        ("RESOURCE_GROUP", "rg-demo"),
        ("LOCATION", "westeurope"),
        ("ACR_NAME", "myacr"),
        ("IMAGE_NAME", "myapp"),
        ("CONTAINER_NAME", "hello"),
        ("IMAGE_TAG", "v1"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Answers prompts from a fixed script and records every question asked.
pub struct ScriptedInteraction {
    answers: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedInteraction {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    pub fn asked(&self, fragment: &str) -> bool {
        self.prompts.lock().iter().any(|p| p.contains(fragment))
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().len()
    }
}

#[async_trait]
impl Interaction for ScriptedInteraction {
    async fn prompt(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().push(prompt.to_string());
        let answer = self.answers.lock().pop_front();
        Ok(answer.unwrap_or_else(|| panic!("unexpected prompt: {prompt}")))
    }
}

type Matcher = Box<dyn Fn(&CommandLine) -> bool + Send + Sync>;

enum Reply {
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    NotInstalled,
}

/// Records every command and replies according to registered rules.
///
/// Commands without a matching rule succeed with empty output. Later rules
/// take precedence over earlier ones.
pub struct FakeRunner {
    rules: Vec<(Matcher, Reply)>,
    calls: Mutex<Vec<CommandLine>>,
}

#[allow(dead_code)]
impl FakeRunner {
    /// Every probe succeeds and the registry hands out credentials.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
        .when(credential_query("username"), 0, "myacr\n")
        .when(credential_query("passwords[0].value"), 0, "s3cret\n")
    }

    /// Nothing has been provisioned yet: every existence probe fails.
    pub fn fresh() -> Self {
        Self::new()
            .fail(&["docker", "image", "inspect"])
            .fail(&["az", "account", "show"])
            .fail(&["az", "group", "show"])
            .fail(&["az", "acr", "show"])
            .fail(&["az", "container", "show"])
    }

    pub fn when<F>(mut self, matcher: F, code: i32, stdout: &str) -> Self
    where
        F: Fn(&CommandLine) -> bool + Send + Sync + 'static,
    {
        self.rules.push((
            Box::new(matcher),
            Reply::Exit {
                code,
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        ));
        self
    }

    /// Commands starting with `prefix` exit with status 1.
    pub fn fail(mut self, prefix: &[&str]) -> Self {
        self.rules.push((
            prefix_matcher(prefix),
            Reply::Exit {
                code: 1,
                stdout: String::new(),
                stderr: format!("{} failed", prefix.join(" ")),
            },
        ));
        self
    }

    /// Commands starting with `prefix` exit successfully.
    pub fn succeed(mut self, prefix: &[&str]) -> Self {
        self.rules.push((
            prefix_matcher(prefix),
            Reply::Exit {
                code: 0,
                stdout: String::new(),
                stderr: String::new(),
            },
        ));
        self
    }

    /// Commands starting with `prefix` cannot be started at all.
    pub fn not_installed(mut self, prefix: &[&str]) -> Self {
        self.rules.push((prefix_matcher(prefix), Reply::NotInstalled));
        self
    }

    pub fn calls(&self) -> Vec<CommandLine> {
        self.calls.lock().clone()
    }

    pub fn ran(&self, prefix: &[&str]) -> bool {
        self.calls.lock().iter().any(|c| c.starts_with(prefix))
    }

    pub fn count(&self, prefix: &[&str]) -> usize {
        self.calls.lock().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn find(&self, prefix: &[&str]) -> Option<CommandLine> {
        self.calls.lock().iter().find(|c| c.starts_with(prefix)).cloned()
    }

    /// Index of the first call starting with `prefix`.
    pub fn position(&self, prefix: &[&str]) -> Option<usize> {
        self.calls.lock().iter().position(|c| c.starts_with(prefix))
    }
}

#[async_trait]
impl ProcessRunner for FakeRunner {
    async fn run(&self, command: &CommandLine) -> std::result::Result<ProcessOutput, ProcessError> {
        self.calls.lock().push(command.clone());

        match self.rules.iter().rev().find(|(m, _)| m(command)) {
            None => Ok(ProcessOutput {
                exit_code: Some(0),
                ..Default::default()
            }),
            Some((_, Reply::Exit { code, stdout, stderr })) => Ok(ProcessOutput {
                exit_code: Some(*code),
                stdout: stdout.clone(),
                stderr: stderr.clone(),
            }),
            Some((_, Reply::NotInstalled)) => Err(ProcessError::Spawn {
                program: command.program().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            }),
        }
    }
}

fn prefix_matcher(prefix: &[&str]) -> Matcher {
    let prefix: Vec<String> = prefix.iter().map(|s| s.to_string()).collect();
    Box::new(move |c: &CommandLine| {
        let words: Vec<&str> = prefix.iter().map(String::as_str).collect();
        c.starts_with(&words)
    })
}

fn credential_query(query: &'static str) -> impl Fn(&CommandLine) -> bool + Send + Sync {
    move |c: &CommandLine| {
        c.starts_with(&["az", "acr", "credential", "show"])
            && c.flag_value("--query") == Some(query)
    }
}
