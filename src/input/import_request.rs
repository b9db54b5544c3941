use std::fmt;

pub type Params = Vec<(&'static str, String)>;

/// Everything the control plane needs to start an import of files that are
/// already sitting in object storage.
#[derive(Clone, PartialEq, Eq)]
pub struct ImportJobRequest {
    pub object_url: String,
    pub access_key: String,
    pub secret_key: String,
    pub cluster_id: String,
    pub collection_name: String,
    // None (or empty) targets the default partition
    pub partition_name: Option<String>,
}

impl ImportJobRequest {
    pub fn new(
        object_url: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        cluster_id: impl Into<String>,
        collection_name: impl Into<String>,
    ) -> Self {
        Self {
            object_url: object_url.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            cluster_id: cluster_id.into(),
            collection_name: collection_name.into(),
            partition_name: None,
        }
    }

    pub fn partition(mut self, partition_name: impl Into<String>) -> Self {
        self.partition_name = Some(partition_name.into());
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        require("objectUrl", &self.object_url)?;
        require("clusterId", &self.cluster_id)?;
        require("collectionName", &self.collection_name)
    }

    pub fn params(&self) -> Params {
        let mut params = vec![
            ("objectUrl", self.object_url.clone()),
            ("accessKey", self.access_key.clone()),
            ("secretKey", self.secret_key.clone()),
            ("clusterId", self.cluster_id.clone()),
            ("collectionName", self.collection_name.clone()),
        ];
        match &self.partition_name {
            Some(partition) if !partition.is_empty() => {
                params.push(("partitionName", partition.clone()))
            }
            _ => {}
        }
        params
    }
}

impl fmt::Debug for ImportJobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportJobRequest")
            .field("object_url", &self.object_url)
            .field("access_key", &self.access_key)
            .field("secret_key", &"***")
            .field("cluster_id", &self.cluster_id)
            .field("collection_name", &self.collection_name)
            .field("partition_name", &self.partition_name)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobProgressQuery {
    pub job_id: String,
    pub cluster_id: String,
}

impl JobProgressQuery {
    pub fn new(job_id: impl Into<String>, cluster_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            cluster_id: cluster_id.into(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require("jobID", &self.job_id)?;
        require("clusterId", &self.cluster_id)
    }

    pub fn params(&self) -> Params {
        vec![
            ("jobID", self.job_id.clone()),
            ("clusterId", self.cluster_id.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListQuery {
    pub cluster_id: String,
    pub page_size: u32,
    pub current_page: u32,
}

impl JobListQuery {
    pub fn new(cluster_id: impl Into<String>, page_size: u32, current_page: u32) -> Self {
        Self {
            cluster_id: cluster_id.into(),
            page_size,
            current_page,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require("clusterId", &self.cluster_id)?;
        if self.page_size == 0 {
            return Err("pageSize must be at least 1".into());
        }
        if self.current_page == 0 {
            return Err("currentPage must be at least 1".into());
        }
        Ok(())
    }

    pub fn params(&self) -> Params {
        vec![
            ("clusterId", self.cluster_id.clone()),
            ("pageSize", self.page_size.to_string()),
            ("currentPage", self.current_page.to_string()),
        ]
    }
}

fn require(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    Ok(())
}
