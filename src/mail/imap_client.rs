use crate::domain::email::{FetchedEmail, MessageId};
use anyhow::{Result, anyhow};
use mailparse::MailHeaderMap;
use native_tls::TlsConnector;

pub struct ImapClient {
    pub server: String,
    pub account: String,
}

impl ImapClient {
    pub fn new(server: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            account: account.into(),
        }
    }

    fn connect_and_login(
        &self,
        password: &str,
    ) -> Result<imap::Session<native_tls::TlsStream<std::net::TcpStream>>> {
        let tls = TlsConnector::builder().build()?;
        let client = imap::connect((self.server.as_str(), 993), self.server.as_str(), &tls)?;
        client
            .login(&self.account, password)
            .map_err(|(e, _client)| anyhow!("IMAP login failed: {e}"))
    }

    /// Fetch the most recent `max` messages from `mailbox`, oldest first.
    pub fn fetch_recent(
        &self,
        password: &str,
        mailbox: &str,
        max: usize,
    ) -> Result<Vec<FetchedEmail>> {
        let mut session = self.connect_and_login(password)?;
        session.select(mailbox)?;

        let mut seqs: Vec<u32> = session.search("ALL")?.into_iter().collect();
        seqs.sort_unstable();
        let start = seqs.len().saturating_sub(max);

        let mut out = Vec::with_capacity(seqs.len() - start);
        for &seq in &seqs[start..] {
            // Fetch THIS message only (more reliable than bulk)
            let fetches = session.fetch(seq.to_string(), "BODY.PEEK[]")?;
            let f = match fetches.iter().next() {
                Some(x) => x,
                None => continue,
            };
            let raw = match f.body() {
                Some(b) => b,
                None => {
                    log::warn!("message {} came back without a body; skipping", seq);
                    continue;
                }
            };
            out.push(parse_message(seq as MessageId, raw));
        }

        session.logout()?;
        Ok(out)
    }
}

/// Best-effort parse of a raw RFC822 message. Header decoding goes through
/// mailparse (which handles RFC 2047 encoded words); an unparseable message
/// yields an empty body and gets skipped by the caller.
fn parse_message(id: MessageId, raw: &[u8]) -> FetchedEmail {
    match mailparse::parse_mail(raw) {
        Ok(parsed) => {
            let subject = parsed.headers.get_first_value("Subject").unwrap_or_default();
            let sender = parsed.headers.get_first_value("From").unwrap_or_default();
            let body = extract_plaintext(&parsed).unwrap_or_default();
            FetchedEmail {
                id,
                sender,
                subject,
                body,
            }
        }
        Err(_) => FetchedEmail {
            id,
            sender: String::new(),
            subject: String::new(),
            body: String::new(),
        },
    }
}

/// Walk the MIME tree depth-first and return the first text/plain body.
/// Parts that fail to decode are silently skipped; a message with no
/// text/plain part yields None.
fn extract_plaintext(p: &mailparse::ParsedMail) -> Option<String> {
    let mime = p.ctype.mimetype.to_ascii_lowercase();
    if mime == "text/plain" {
        return p.get_body().ok();
    }

    for sp in &p.subparts {
        if let Some(t) = extract_plaintext(sp) {
            return Some(t);
        }
    }

    None
}
