use strike_core::{BookingClient, BookingRequest, BookingResponse, SubmissionError, check_status};

/// Booking endpoint reached over HTTP from the command line.
#[derive(Debug, Clone)]
pub struct HttpBookingClient {
    client: reqwest::Client,
    url: String,
}

impl HttpBookingClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl BookingClient for HttpBookingClient {
    async fn book(&self, request: &BookingRequest) -> Result<BookingResponse, SubmissionError> {
        log::debug!("POST {} {:?}", self.url, request);
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;
        check_status(response.status().as_u16())?;
        response
            .json::<BookingResponse>()
            .await
            .map_err(|e| SubmissionError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strike_core::{BookingDraft, DraftField};

    #[test]
    fn unreachable_endpoint_is_a_transport_error() {
        let client = HttpBookingClient::new("http://127.0.0.1:9/booking");
        let draft = BookingDraft::new()
            .with_field(DraftField::Date, "2025-12-24")
            .with_field(DraftField::Time, "18:00")
            .with_field(DraftField::People, "1")
            .with_field(DraftField::Lanes, "1");
        let request = BookingRequest::from_draft(&draft).unwrap();
        let err = tokio_test::block_on(client.book(&request)).unwrap_err();
        assert!(matches!(err, SubmissionError::Transport(_)), "{err:?}");
    }
}
