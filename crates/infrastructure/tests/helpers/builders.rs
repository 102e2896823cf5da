#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, NS, SOA};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub struct ResponseBuilder {
    message: Message,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            message: Message::new(0x1234, MessageType::Response, OpCode::Query),
        }
    }

    pub fn question(mut self, qname: &str, record_type: RecordType) -> Self {
        let mut query = Query::query(name(qname), record_type);
        query.set_query_class(DNSClass::IN);
        self.message.add_query(query);
        self
    }

    pub fn question_class(mut self, qname: &str, record_type: RecordType, class: DNSClass) -> Self {
        let mut query = Query::query(name(qname), record_type);
        query.set_query_class(class);
        self.message.add_query(query);
        self
    }

    pub fn answer_a(mut self, owner: &str, addr: Ipv4Addr) -> Self {
        self.message
            .add_answer(Record::from_rdata(name(owner), 300, RData::A(A(addr))));
        self
    }

    pub fn authority_ns(mut self, owner: &str, target: &str) -> Self {
        self.message.add_name_server(Record::from_rdata(
            name(owner),
            3600,
            RData::NS(NS(name(target))),
        ));
        self
    }

    pub fn authority_soa(mut self, zone: &str) -> Self {
        let soa = SOA::new(
            name(&format!("ns1.{}", zone)),
            name(&format!("hostmaster.{}", zone)),
            1,
            3600,
            900,
            604800,
            300,
        );
        self.message
            .add_name_server(Record::from_rdata(name(zone), 300, RData::SOA(soa)));
        self
    }

    pub fn rcode(mut self, rcode: ResponseCode) -> Self {
        self.message.set_response_code(rcode);
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}
