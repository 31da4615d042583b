use async_trait::async_trait;

use crate::error::Result;
use crate::pagination::{Page, PageRequest, collect_pages};
use crate::providers::common::without_apex_ns;
use crate::traits::DnsProvider;
use crate::types::{Domain, Record, RecordStatus};

use super::types::{
    AckResponse, AddDomainRecordRequest, AddDomainRecordResponse, AliyunDomain, AliyunRecord,
    DeleteDomainRecordRequest, DescribeDomainRecordsRequest, DescribeDomainRecordsResponse,
    DescribeDomainsRequest, DescribeDomainsResponse, SetDomainRecordStatusRequest,
    UpdateDomainRecordRequest,
};
use super::{ALIDNS, AliyunProvider, MAX_PAGE_SIZE};

/// Returned by `UpdateDomainRecord` when nothing but the status differs.
const RECORD_DUPLICATE: &str = "DomainRecordDuplicate";

impl AliyunProvider {
    async fn domains_page(&self, page: PageRequest) -> Result<Page<AliyunDomain>> {
        let req = DescribeDomainsRequest {
            page_number: page.number,
            page_size: MAX_PAGE_SIZE,
        };
        let response: DescribeDomainsResponse = self.request("DescribeDomains", &req).await?;

        Ok(Page {
            items: response.domains.and_then(|d| d.domain).unwrap_or_default(),
            total: response.total_count.unwrap_or(0),
        })
    }

    async fn records_page(&self, domain: &str, page: PageRequest) -> Result<Page<AliyunRecord>> {
        let req = DescribeDomainRecordsRequest {
            domain_name: domain.to_string(),
            page_number: page.number,
            page_size: MAX_PAGE_SIZE,
        };
        let response: DescribeDomainRecordsResponse =
            self.request("DescribeDomainRecords", &req).await?;

        Ok(Page {
            items: response
                .domain_records
                .and_then(|r| r.record)
                .unwrap_or_default(),
            total: response.total_count.unwrap_or(0),
        })
    }
}

#[async_trait]
impl DnsProvider for AliyunProvider {
    fn id(&self) -> &'static str {
        ALIDNS
    }

    async fn list_domains(&self) -> Result<Vec<Domain>> {
        let domains = collect_pages(|page| self.domains_page(page)).await?;

        Ok(domains
            .into_iter()
            .map(|d| Domain {
                name: d.domain_name,
                provider_name: Some(ALIDNS.to_string()),
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
        let req = AddDomainRecordRequest::new(&domain.name, record);
        let response: AddDomainRecordResponse = self.request("AddDomainRecord", &req).await?;

        // AddDomainRecord has no status parameter.
        if record.status == RecordStatus::Disable {
            if let Err(e) = self
                .set_record_status(&domain.name, &response.record_id, RecordStatus::Disable)
                .await
            {
                // The record exists but is enabled; take it back out.
                if let Err(cleanup) = self.delete_record(&domain.name, &response.record_id).await {
                    log::error!(
                        "[{ALIDNS}] record {} left enabled after failed status call: {cleanup}",
                        response.record_id
                    );
                }
                return Err(e);
            }
        }
        Ok(())
    }

    async fn delete_record(&self, _domain: &str, record_id: &str) -> Result<()> {
        let req = DeleteDomainRecordRequest {
            record_id: record_id.to_string(),
        };
        let ack: AckResponse = self.request("DeleteDomainRecord", &req).await?;
        log::debug!(
            "[{ALIDNS}] deleted record {record_id} (request {:?})",
            ack.request_id
        );
        Ok(())
    }

    async fn modify_record(&self, domain: &str, record: &Record) -> Result<()> {
        let req = UpdateDomainRecordRequest::new(record);
        match self.request::<AckResponse, _>("UpdateDomainRecord", &req).await {
            Ok(_) => {}
            Err(e) if e.raw_code() == Some(RECORD_DUPLICATE) => {
                log::debug!("[{ALIDNS}] record {} content unchanged", record.id);
            }
            Err(e) => return Err(e),
        }

        self.set_record_status(domain, &record.id, record.status)
            .await
            .inspect_err(|e| {
                log::error!(
                    "[{ALIDNS}] record {} updated but status {} not applied: {e}",
                    record.id,
                    record.status
                );
            })
    }

    async fn set_record_status(
        &self,
        _domain: &str,
        record_id: &str,
        status: RecordStatus,
    ) -> Result<()> {
        let req = SetDomainRecordStatusRequest {
            record_id: record_id.to_string(),
            status,
        };
        let _: AckResponse = self.request("SetDomainRecordStatus", &req).await?;
        Ok(())
    }
}
