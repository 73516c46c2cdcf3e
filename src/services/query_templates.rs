// Wayback Finder Query Template Registry
// Maps each query type to the lookup URL it opens: Wayback Machine CDX searches,
// the Common Crawl index, certificate transparency and threat-intel pages.

use crate::services::domain_extractor;
use crate::types::errors::QueryError;
use crate::types::query::{BuiltQuery, QueryTarget, QueryType};
use crate::types::settings::SourceSettings;

const CDX_SEARCH: &str = "https://web.archive.org/cdx/search/cdx";

/// File extensions worth finding in archived URL lists.
const INTERESTING_EXTENSIONS: &str = r"xls|xml|xlsx|json|pdf|sql|doc|docx|pptx|txt|zip|tar\.gz|tgz|bak|7z|rar|log|cache|secret|db|backup|yml|gz|git|config|csv|yaml|md|md5|exe|dll|bin|ini|bat|sh|tar|deb|rpm|iso|img|apk|msi|env|dmg|tmp|crt|pem|key|pub|asc";

const DOCUMENT_MIMETYPES: &str = "pdf|msword|vnd.ms-excel|vnd.openxmlformats";

const SOURCE_MIMETYPES: &str = r"c\+\+|c|java|python|script|php|perl";

/// Builds lookup URLs from a query type and a parsed target.
#[derive(Debug, Clone)]
pub struct QueryTemplateRegistry {
    sources: SourceSettings,
}

impl Default for QueryTemplateRegistry {
    fn default() -> Self {
        Self::new(&SourceSettings::default())
    }
}

impl QueryTemplateRegistry {
    pub fn new(sources: &SourceSettings) -> Self {
        Self {
            sources: sources.clone(),
        }
    }

    /// Returns the lookup URL for `query_type` against `target`.
    pub fn build(&self, query_type: QueryType, target: &QueryTarget) -> String {
        let host = &target.hostname;
        match query_type {
            QueryType::Domain => format!(
                "{CDX_SEARCH}?url={host}/*&collapse=urlkey&output=text&fl=original"
            ),
            QueryType::Wildcard => format!(
                "{CDX_SEARCH}?url=*.{host}/*&collapse=urlkey&output=text&fl=original"
            ),
            QueryType::Specific => format!(
                "{CDX_SEARCH}?url={}/*&collapse=urlkey&output=text&fl=original",
                target.path_url
            ),
            QueryType::Extensions => format!(
                "{CDX_SEARCH}?url=*.{host}/*&collapse=urlkey&output=text&fl=original\
                 &filter=original:.*\\.({INTERESTING_EXTENSIONS})$"
            ),
            QueryType::AdvDocuments => format!(
                "{CDX_SEARCH}?url=*.{host}/*&filter=statuscode:200\
                 &filter=mimetype:application/.*({DOCUMENT_MIMETYPES}).*&collapse=digest&output=json"
            ),
            QueryType::SourceCode => format!(
                "{CDX_SEARCH}?url=*.{host}/*&filter=mimetype:text/x-({SOURCE_MIMETYPES}).*\
                 &filter=!mimetype:text/html&output=json"
            ),
            QueryType::ApiParams => format!(
                "{CDX_SEARCH}?url=*.{host}/*&matchType=prefix&filter=original:.*\\?.*\
                 &collapse=urlkey&output=json"
            ),
            QueryType::JsonXml => format!(
                "{CDX_SEARCH}?url=*.{host}/*&filter=mimetype:application/(json|xml).*\
                 &filter=statuscode:200&output=json"
            ),
            QueryType::CommonCrawl => format!(
                "https://index.commoncrawl.org/{}-index?url=*.{host}&output=json",
                self.sources.common_crawl_index
            ),
            QueryType::AlienVault => format!("https://otx.alienvault.com/indicator/domain/{host}"),
            QueryType::CrtSh => format!("https://crt.sh/?q=%.{host}"),
            QueryType::VirusTotal => {
                format!("https://www.virustotal.com/gui/domain/{host}/details")
            }
            QueryType::UrlScan => format!(
                "https://urlscan.io/api/v1/search/?q=domain:{host}&size={}",
                self.sources.urlscan_page_size
            ),
            QueryType::Temporal => format!(
                "{CDX_SEARCH}?url={host}/*&from={}&to={}&filter=statuscode:200\
                 &fl=original,timestamp,mimetype&output=json",
                self.sources.temporal_from, self.sources.temporal_to
            ),
        }
    }

    /// Parses `input` and builds the query for `query_type`.
    pub fn build_query(&self, query_type: QueryType, input: &str) -> Result<BuiltQuery, QueryError> {
        let target = domain_extractor::parse_target(input)?;
        let url = self.build(query_type, &target);
        Ok(BuiltQuery {
            query_type,
            hostname: target.hostname,
            label: query_type.label().to_string(),
            url,
        })
    }

    /// Like [`build_query`](Self::build_query), looking the type up by its identifier.
    pub fn build_by_id(&self, id: &str, input: &str) -> Result<BuiltQuery, QueryError> {
        let query_type =
            QueryType::from_id(id).ok_or_else(|| QueryError::UnknownQueryType(id.to_string()))?;
        self.build_query(query_type, input)
    }
}
