use serde::{Deserialize, Serialize};

/// The fourteen OSINT lookups the finder can build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum QueryType {
    Domain,
    Wildcard,
    Specific,
    Extensions,
    AdvDocuments,
    SourceCode,
    ApiParams,
    JsonXml,
    CommonCrawl,
    AlienVault,
    CrtSh,
    VirusTotal,
    UrlScan,
    Temporal,
}

/// Grouping used when presenting query types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryCategory {
    BasicWayback,
    AdvancedWayback,
    ExternalIntelligence,
}

impl QueryCategory {
    pub fn label(&self) -> &'static str {
        match self {
            QueryCategory::BasicWayback => "Basic Wayback",
            QueryCategory::AdvancedWayback => "Advanced Wayback",
            QueryCategory::ExternalIntelligence => "External Intelligence",
        }
    }
}

impl QueryType {
    /// Every query type, in presentation order.
    pub const ALL: [QueryType; 14] = [
        QueryType::Domain,
        QueryType::Wildcard,
        QueryType::Specific,
        QueryType::Extensions,
        QueryType::AdvDocuments,
        QueryType::SourceCode,
        QueryType::ApiParams,
        QueryType::JsonXml,
        QueryType::CommonCrawl,
        QueryType::AlienVault,
        QueryType::CrtSh,
        QueryType::VirusTotal,
        QueryType::UrlScan,
        QueryType::Temporal,
    ];

    /// Stable identifier used by front ends and the RPC protocol.
    pub fn id(&self) -> &'static str {
        match self {
            QueryType::Domain => "domain",
            QueryType::Wildcard => "wildcard",
            QueryType::Specific => "specific",
            QueryType::Extensions => "extensions",
            QueryType::AdvDocuments => "advDocuments",
            QueryType::SourceCode => "sourceCode",
            QueryType::ApiParams => "apiParams",
            QueryType::JsonXml => "jsonXml",
            QueryType::CommonCrawl => "commonCrawl",
            QueryType::AlienVault => "alienVault",
            QueryType::CrtSh => "crtSh",
            QueryType::VirusTotal => "virusTotal",
            QueryType::UrlScan => "urlScan",
            QueryType::Temporal => "temporal",
        }
    }

    pub fn from_id(id: &str) -> Option<QueryType> {
        QueryType::ALL.iter().copied().find(|t| t.id() == id)
    }

    /// Label recorded in history entries.
    pub fn label(&self) -> &'static str {
        match self {
            QueryType::Domain => "Main Domain",
            QueryType::Wildcard => "Wildcard Domain",
            QueryType::Specific => "Specific Path",
            QueryType::Extensions => "File Extensions",
            QueryType::AdvDocuments => "Advanced Documents (Status 200)",
            QueryType::SourceCode => "Source Code Leaks",
            QueryType::ApiParams => "API Parameters",
            QueryType::JsonXml => "JSON/XML Endpoints",
            QueryType::CommonCrawl => "Common Crawl Index",
            QueryType::AlienVault => "AlienVault OTX Threat Intel",
            QueryType::CrtSh => "Certificate Transparency (CRT.sh)",
            QueryType::VirusTotal => "VirusTotal Domain Analysis",
            QueryType::UrlScan => "URLScan.io Analysis",
            QueryType::Temporal => "Temporal Analysis (COVID Period)",
        }
    }

    pub fn category(&self) -> QueryCategory {
        match self {
            QueryType::Domain | QueryType::Wildcard | QueryType::Specific | QueryType::Extensions => {
                QueryCategory::BasicWayback
            }
            QueryType::AdvDocuments
            | QueryType::SourceCode
            | QueryType::ApiParams
            | QueryType::JsonXml => QueryCategory::AdvancedWayback,
            _ => QueryCategory::ExternalIntelligence,
        }
    }
}

/// Parsed target of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTarget {
    pub hostname: String,
    /// Origin plus path of the parsed input, without query string or fragment.
    pub path_url: String,
}

/// A fully built query, ready to open and record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BuiltQuery {
    pub query_type: QueryType,
    pub hostname: String,
    pub label: String,
    pub url: String,
}

/// Result of executing a query through the controller.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueryOutcome {
    pub query: BuiltQuery,
    /// Number of entries in history after recording, when recording succeeded.
    pub history_len: Option<usize>,
    /// Set when the tab opened but the history write failed.
    pub history_error: Option<String>,
}
