use anyhow::Context;
use bulkimport::{
    global_logger, ClientConfig, ImportClient, ImportJobRequest, JobListQuery, JobProgressQuery,
};
use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "bulk-import")]
#[command(about = "Start, inspect and list bulk-import jobs of a managed cluster", long_about = None)]
struct Cli {
    /// Per-request timeout in seconds
    #[arg(long = "timeout-secs", global = true, default_value_t = 20)]
    timeout_secs: u64,

    /// Retry transient failures this many times (0 sends exactly one request)
    #[arg(long, global = true, default_value_t = 0)]
    retries: u32,

    /// Require https with TLS 1.2 or newer
    #[arg(long = "use-tls", global = true)]
    use_tls: bool,

    /// Extra PEM root certificate to trust
    #[arg(long = "tls-cert", global = true)]
    tls_cert: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import prepared data files from object storage into a collection
    Submit {
        #[arg(long)]
        url: String,
        #[arg(long = "object-url")]
        object_url: String,
        #[arg(long = "access-key")]
        access_key: String,
        #[arg(long = "secret-key")]
        secret_key: String,
        #[arg(long = "cluster-id")]
        cluster_id: String,
        #[arg(long)]
        collection: String,
        /// Target partition, default partition when omitted
        #[arg(long)]
        partition: Option<String>,
    },
    /// Show the progress of an import job
    Progress {
        #[arg(long)]
        url: String,
        #[arg(long = "job-id")]
        job_id: String,
        #[arg(long = "cluster-id")]
        cluster_id: String,
    },
    /// List the import jobs of a cluster
    List {
        #[arg(long)]
        url: String,
        #[arg(long = "cluster-id")]
        cluster_id: String,
        #[arg(long = "page-size", default_value_t = 10)]
        page_size: u32,
        #[arg(long = "current-page", default_value_t = 1)]
        current_page: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = ClientConfig::builder()
        .timeout_secs(cli.timeout_secs)
        .n_retries(cli.retries)
        .use_tls(cli.use_tls)
        .tls_cert_opt(cli.tls_cert)
        .build();
    let client = ImportClient::new(&config, global_logger())?;

    let response: Value = match cli.command {
        Command::Submit {
            url,
            object_url,
            access_key,
            secret_key,
            cluster_id,
            collection,
            partition,
        } => {
            let mut request =
                ImportJobRequest::new(object_url, access_key, secret_key, cluster_id, collection);
            if let Some(partition) = partition {
                request = request.partition(partition);
            }
            let response = client.submit_import(&url, &request).await?;
            log::info!("Import job id: {}", response.job_id());
            response.into_inner()
        }
        Command::Progress {
            url,
            job_id,
            cluster_id,
        } => {
            client
                .get_job_progress(&url, &JobProgressQuery::new(job_id, cluster_id))
                .await?
        }
        Command::List {
            url,
            cluster_id,
            page_size,
            current_page,
        } => {
            client
                .list_jobs(&url, &JobListQuery::new(cluster_id, page_size, current_page))
                .await?
        }
    };

    let printed =
        serde_json::to_string_pretty(&response).context("could not render response as JSON")?;
    println!("{}", printed);
    Ok(())
}
