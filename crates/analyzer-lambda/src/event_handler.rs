use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{Error, LambdaEvent};
use percent_encoding::percent_decode_str;
use sensor_analyzer::{Analysis, Analyzer, Summary};
use tracing::{error, info, warn};

/// Bucket/key reference to an uploaded document
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DocumentRef {
    pub bucket: String,
    pub key: String,
}

impl DocumentRef {
    fn from_record(record: &S3EventRecord) -> Result<Self, Error> {
        let bucket = record
            .s3
            .bucket
            .name
            .clone()
            .ok_or_else(|| Error::from("No bucket name found in S3 event record"))?;
        let key = record
            .s3
            .object
            .key
            .as_deref()
            .ok_or_else(|| Error::from("No object key found in S3 event record"))?;
        Ok(Self {
            bucket,
            key: decode_key(key)?,
        })
    }
}

/// Notification keys are form-encoded: spaces as '+', everything else as %XX
fn decode_key(encoded: &str) -> Result<String, Error> {
    let spaced = encoded.replace('+', " ");
    let key = percent_decode_str(&spaced)
        .decode_utf8()
        .map_err(|err| Error::from(format!("Object key {encoded:?} is not valid UTF-8: {err}")))?;
    Ok(key.into_owned())
}

async fn fetch_document(s3_client: &S3Client, document: &DocumentRef) -> Result<Vec<u8>, Error> {
    let output = s3_client
        .get_object()
        .bucket(&document.bucket)
        .key(&document.key)
        .send()
        .await?;
    let bytes = output.body.collect().await?.into_bytes();
    Ok(bytes.to_vec())
}

fn log_report(document: &DocumentRef, analysis: &Analysis) {
    for line in analysis.report().lines() {
        info!(bucket = %document.bucket, key = %document.key, "{}", line);
    }
}

async fn process_document(
    s3_client: &S3Client,
    analyzer: &Analyzer,
    document: &DocumentRef,
) -> Result<Summary, Error> {
    info!("Analyzing {}/{}", document.bucket, document.key);
    let bytes = fetch_document(s3_client, document).await?;
    let analysis = analyzer.analyze(&bytes).map_err(|err| {
        error!(bucket = %document.bucket, key = %document.key, "Analysis failed: {}", err);
        err
    })?;
    log_report(document, &analysis);
    Ok(analysis.summary)
}

pub(crate) async fn function_handler(
    event: LambdaEvent<S3Event>,
    s3_client: &S3Client,
    analyzer: &Analyzer,
) -> Result<Summary, Error> {
    let payload = event.payload;
    if payload.records.is_empty() {
        warn!("No records found in S3 event");
        return Ok(Summary::default());
    }

    let documents = payload
        .records
        .iter()
        .map(DocumentRef::from_record)
        .collect::<Result<Vec<_>, _>>()?;

    let mut summary = Summary::default();
    for document in &documents {
        summary = summary.merge(process_document(s3_client, analyzer, document).await?);
    }
    info!("Invocation summary: ok={} alert_count={}", summary.ok, summary.alert_count);
    Ok(summary)
}
