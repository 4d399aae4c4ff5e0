//! Service tests for webserver
