use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::pagination::{Page, PageRequest, collect_pages};
use crate::providers::common::without_apex_ns;
use crate::traits::DnsProvider;
use crate::types::{Domain, Record, RecordStatus};

use super::types::{
    AckResponse, CreateRecordRequest, CreateRecordResponse, DeleteRecordRequest,
    DescribeDomainListRequest, DescribeRecordListRequest, DnspodDomain, DnspodRecord,
    DomainListResponse, ModifyRecordRequest, ModifyRecordStatusRequest, RecordListResponse,
};
use super::{DNSPOD, DnspodProvider, MAX_PAGE_SIZE};

/// Codes DNSPod uses to report an empty listing.
const NO_DATA_OF_DOMAIN: &str = "ResourceNotFound.NoDataOfDomain";
const NO_DATA_OF_RECORD: &str = "ResourceNotFound.NoDataOfRecord";

/// Maps an "empty listing" error to an empty last page.
fn empty_page_on<T>(result: Result<Page<T>>, no_data_code: &str) -> Result<Page<T>> {
    match result {
        Err(e) if e.raw_code() == Some(no_data_code) => Ok(Page {
            items: Vec::new(),
            total: 0,
        }),
        other => other,
    }
}

impl DnspodProvider {
    /// Record ids are numeric on the DNSPod side.
    fn parse_record_id(record_id: &str) -> Result<u64> {
        record_id
            .parse()
            .map_err(|_| ProviderError::InvalidParameter {
                provider: DNSPOD.to_string(),
                param: "record_id".to_string(),
                detail: format!("'{record_id}' is not a numeric record id"),
            })
    }

    async fn domains_page(&self, page: PageRequest) -> Result<Page<DnspodDomain>> {
        let req = DescribeDomainListRequest {
            offset: page.offset,
            limit: MAX_PAGE_SIZE,
        };
        let response: Result<DomainListResponse> =
            self.request("DescribeDomainList", &req).await;

        empty_page_on(
            response.map(|data| Page {
                items: data.domain_list.unwrap_or_default(),
                total: data
                    .domain_count_info
                    .and_then(|c| c.all_total)
                    .unwrap_or(0),
            }),
            NO_DATA_OF_DOMAIN,
        )
    }

    async fn records_page(&self, domain: &str, page: PageRequest) -> Result<Page<DnspodRecord>> {
        let req = DescribeRecordListRequest {
            domain: domain.to_string(),
            offset: page.offset,
            limit: MAX_PAGE_SIZE,
        };
        let response: Result<RecordListResponse> =
            self.request("DescribeRecordList", &req).await;

        empty_page_on(
            response.map(|data| Page {
                items: data.record_list.unwrap_or_default(),
                total: data
                    .record_count_info
                    .and_then(|c| c.total_count)
                    .unwrap_or(0),
            }),
            NO_DATA_OF_RECORD,
        )
    }
}

#[async_trait]
impl DnsProvider for DnspodProvider {
    fn id(&self) -> &'static str {
        DNSPOD
    }

    async fn list_domains(&self) -> Result<Vec<Domain>> {
        let domains = collect_pages(|page| self.domains_page(page)).await?;

        Ok(domains
            .into_iter()
            .map(|d| Domain {
                name: d.name,
                provider_name: Some(DNSPOD.to_string()),
            })
            .collect())
    }

    async fn list_records(&self, domain: &str) -> Result<Vec<Record>> {
        let records = collect_pages(|page| self.records_page(domain, page)).await?;

        Ok(without_apex_ns(
            records.into_iter().map(Record::from).collect(),
        ))
    }

    async fn create_record(&self, domain: &Domain, record: &Record) -> Result<()> {
        let req = CreateRecordRequest::new(&domain.name, record);
        let response: CreateRecordResponse = self.request("CreateRecord", &req).await?;
        log::debug!("[{DNSPOD}] created record {}", response.record_id);
        Ok(())
    }

    async fn delete_record(&self, domain: &str, record_id: &str) -> Result<()> {
        let req = DeleteRecordRequest {
            domain: domain.to_string(),
            record_id: Self::parse_record_id(record_id)?,
        };
        let ack: AckResponse = self.request("DeleteRecord", &req).await?;
        log::debug!(
            "[{DNSPOD}] deleted record {record_id} (request {:?})",
            ack.request_id
        );
        Ok(())
    }

    async fn modify_record(&self, domain: &str, record: &Record) -> Result<()> {
        let req = ModifyRecordRequest::new(domain, Self::parse_record_id(&record.id)?, record);
        let _: AckResponse = self.request("ModifyRecord", &req).await?;
        Ok(())
    }

    async fn set_record_status(
        &self,
        domain: &str,
        record_id: &str,
        status: RecordStatus,
    ) -> Result<()> {
        let req = ModifyRecordStatusRequest {
            domain: domain.to_string(),
            record_id: Self::parse_record_id(record_id)?,
            status,
        };
        let _: AckResponse = self.request("ModifyRecordStatus", &req).await?;
        Ok(())
    }
}
