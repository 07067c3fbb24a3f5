//! Shared harness for integration tests: a scaffolded project tree plus
//! recording fakes for the process runner and template fetcher.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use tempfile::TempDir;

use skelly::app::InstallContext;
use skelly::domain::{AppError, Author, BaseFile, ComposerSettings, Configuration, Tool};
use skelly::ports::{ProcessRunner, ProgressReporter, TemplateFetcher};

/// A temporary directory populated like a freshly scaffolded skeleton.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp project");
        let project = Self { dir };

        project.write(
            "composer.json",
            r#"{
    "name": "laravel/laravel",
    "type": "project",
    "require": {
        "php": "^8.3"
    },
    "require-dev": {
        "phpunit/phpunit": "^11.0"
    },
    "autoload": {
        "psr-4": {
            "App\\": "app/"
        }
    },
    "scripts": {
        "post-autoload-dump": "echo done"
    }
}
"#,
        );

        let env = "APP_NAME=Laravel\nAPP_ENV=local\nDB_DATABASE=laravel\n";
        project.write(".env", env);
        project.write(".env.example", env);

        project.write(
            "config/app.php",
            "<?php\n\nreturn [\n    'name' => env('APP_NAME', 'Laravel'),\n];\n",
        );
        project.write(
            "config/cache.php",
            "<?php\n\nreturn [\n    'prefix' => env('APP_NAME', 'laravel'),\n];\n",
        );
        project.write(
            "config/database.php",
            "<?php\n\nreturn [\n    'database' => env('DB_DATABASE', 'laravel'),\n];\n",
        );
        project.write(
            "config/session.php",
            "<?php\n\nreturn [\n    'cookie' => env('APP_NAME', 'laravel'),\n];\n",
        );

        project.write("package.json", "{\"private\": true}\n");
        project.write("package-lock.json", "{}\n");
        project.write("vite.config.js", "export default {};\n");
        project.write("tailwind.config.js", "module.exports = {};\n");
        project.write("postcss.config.js", "module.exports = {};\n");
        project.write("resources/css/app.css", "body {}\n");
        project.write("resources/js/app.js", "console.log('hi');\n");
        project.write("resources/views/welcome.blade.php", "<html></html>\n");
        project.write(
            "routes/web.php",
            "<?php\n\nRoute::get('/', function () {\n    return view('welcome');\n});\n",
        );

        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(path, contents).expect("write fixture file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative)).expect("read project file")
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.root().join(relative).exists()
    }
}

/// Process runner that records rendered invocations instead of spawning.
pub struct RecordingRunner {
    pub calls: Rc<RefCell<Vec<String>>>,
    pub fail_matching: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        (Self { calls: Rc::clone(&calls), fail_matching: None }, calls)
    }

    pub fn failing_on(pattern: &str) -> (Self, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        (Self { calls: Rc::clone(&calls), fail_matching: Some(pattern.to_string()) }, calls)
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], _cwd: &Path) -> Result<(), AppError> {
        let rendered = format!("{program} {}", args.join(" "));
        self.calls.borrow_mut().push(rendered.clone());

        if let Some(pattern) = &self.fail_matching {
            if rendered.contains(pattern.as_str()) {
                return Err(AppError::Process {
                    command: rendered,
                    details: "scripted failure".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Fetcher that returns a canned body and records requested URLs.
pub struct StaticFetcher {
    pub requests: Rc<RefCell<Vec<String>>>,
    pub body: Vec<u8>,
    pub fail_matching: Option<String>,
}

impl StaticFetcher {
    pub fn new(body: &str) -> (Self, Rc<RefCell<Vec<String>>>) {
        let requests = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                requests: Rc::clone(&requests),
                body: body.as_bytes().to_vec(),
                fail_matching: None,
            },
            requests,
        )
    }

    pub fn failing_on(pattern: &str) -> (Self, Rc<RefCell<Vec<String>>>) {
        let requests = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                requests: Rc::clone(&requests),
                body: Vec::new(),
                fail_matching: Some(pattern.to_string()),
            },
            requests,
        )
    }
}

impl TemplateFetcher for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError> {
        self.requests.borrow_mut().push(url.to_string());

        if let Some(pattern) = &self.fail_matching {
            if url.contains(pattern.as_str()) {
                return Err(AppError::Fetch {
                    url: url.to_string(),
                    details: "scripted failure".to_string(),
                });
            }
        }
        Ok(self.body.clone())
    }
}

/// Reporter that records executor events.
#[derive(Default)]
pub struct RecordingReporter {
    pub events: Vec<String>,
}

impl ProgressReporter for RecordingReporter {
    fn begin(&mut self, total: usize) {
        self.events.push(format!("begin {total}"));
    }

    fn announce(&mut self, index: usize, total: usize, label: &str) {
        self.events.push(format!("{index}/{total} {label}"));
    }

    fn finish(&mut self) {
        self.events.push("finish".to_string());
    }
}

/// A fully-populated configuration: every optional feature enabled.
pub fn sample_config() -> Configuration {
    Configuration {
        application_name: "Acme".to_string(),
        base_files: BaseFile::ALL.to_vec(),
        tools: Tool::ALL.to_vec(),
        composer: ComposerSettings {
            name: "acme/my-app".to_string(),
            description: "The Acme application".to_string(),
            license: "MIT".to_string(),
            authors: vec![Author {
                name: "Jane Developer".to_string(),
                email: "jane@example.com".to_string(),
                role: "Developer".to_string(),
                homepage: "https://example.com".to_string(),
            }],
        },
        move_tinker: true,
        remove_frontend: true,
    }
}

/// Wire a context over the test project with the given fakes.
pub fn context(
    project: &TestProject,
    runner: RecordingRunner,
    fetcher: StaticFetcher,
) -> InstallContext {
    InstallContext::new(project.root().to_path_buf(), Box::new(runner), Box::new(fetcher))
}
