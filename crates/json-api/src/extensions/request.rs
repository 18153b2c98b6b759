//! Request helper extensions.

use salvo::Request;

const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

pub(crate) trait RequestExt {
    /// Address of the client that made the request.
    ///
    /// Uses the first hop of `X-Forwarded-For` when present, otherwise the
    /// socket peer address.
    fn viewer_address(&self) -> Option<String>;
}

impl RequestExt for Request {
    fn viewer_address(&self) -> Option<String> {
        if let Some(forwarded) = self
            .header::<String>(FORWARDED_FOR_HEADER)
            .as_deref()
            .and_then(first_hop)
        {
            return Some(forwarded);
        }

        self.remote_addr()
            .as_ipv4()
            .map(|addr| addr.ip().to_string())
            .or_else(|| self.remote_addr().as_ipv6().map(|addr| addr.ip().to_string()))
    }
}

fn first_hop(header: &str) -> Option<String> {
    header
        .split(',')
        .map(str::trim)
        .find(|hop| !hop.is_empty())
        .map(str::to_owned)
}
