//! テスト用ユーティリティ

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use statuspage::config::CycleConfig;
use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 結果一覧を1行ずつ出力する最小テンプレート
pub const LIST_TEMPLATE: &str =
    "{{ status }}\n{% for r in results %}{{ r.url }} {{ r.status_code }} {{ r.error or '' }}\n{% endfor %}";

/// テンプレートと出力先を持つ一時ディレクトリ
#[allow(dead_code)]
pub struct Workspace {
    pub dir: TempDir,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
}

#[allow(dead_code)]
impl Workspace {
    /// `template`がNoneならテンプレートファイルを作らない
    pub fn new(template: Option<&str>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let template_dir = dir.path().join("templates");
        let output_dir = dir.path().join("htdocs");
        fs::create_dir_all(&template_dir).unwrap();
        fs::create_dir_all(&output_dir).unwrap();

        // .txtにしておけばHTMLエスケープされずURLをそのまま比較できる
        let template_path = template_dir.join("status.txt");
        if let Some(source) = template {
            fs::write(&template_path, source).unwrap();
        }

        Self {
            dir,
            template_path,
            output_path: output_dir.join("index.html"),
        }
    }

    pub fn config(&self, urls: Vec<String>, timeout: Duration) -> CycleConfig {
        CycleConfig::new(urls, timeout, &self.template_path, &self.output_path).unwrap()
    }

    pub fn temp_output_path(&self) -> PathBuf {
        let mut path = self.output_path.clone().into_os_string();
        path.push(".new");
        PathBuf::from(path)
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(&self.output_path).unwrap()
    }
}

/// 固定ステータスを返すモックサイトを起動
#[allow(dead_code)]
pub async fn mock_site(status: u16, delay: Option<Duration>) -> MockServer {
    let server = MockServer::start().await;
    let mut response = ResponseTemplate::new(status);
    if let Some(delay) = delay {
        response = response.set_delay(delay);
    }
    Mock::given(method("GET"))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

/// 接続を拒否するURL
#[allow(dead_code)]
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}
