//! Project and company service integration tests.

mod support;

use support::{connect, mount_operation, requests_for};
use twentyfour_domain::{CompanySearch, NewCompany, ProjectSearch, TwentyFourError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CHUNK_SIZE: usize = 1024;

fn project_fragment(id: i32, name: &str) -> String {
    format!("<Id>{id}</Id><Name>{name}</Name><CustomerId>7</CustomerId><Version>1</Version>")
}

#[tokio::test]
async fn create_project_saves_then_reloads_the_record() {
    let server = MockServer::start().await;
    let client = connect(&server, CHUNK_SIZE).await;

    mount_operation(
        &server,
        "Project",
        "SaveProject",
        "<SaveProjectResponse><SaveProjectResult>99</SaveProjectResult></SaveProjectResponse>",
    )
    .await;
    mount_operation(
        &server,
        "Project",
        "GetSingleProject",
        &format!(
            "<GetSingleProjectResponse><GetSingleProjectResult>{}</GetSingleProjectResult></GetSingleProjectResponse>",
            project_fragment(99, "Website relaunch")
        ),
    )
    .await;

    let project = client.projects().create("Website relaunch").await.expect("create succeeds");
    assert_eq!(project.id, 99);
    assert_eq!(project.name, "Website relaunch");

    let saves = requests_for(&server, "SaveProject").await;
    assert_eq!(saves.len(), 1);
    assert!(saves[0].contains("<Name>Website relaunch</Name>"));
    assert!(saves[0].contains("<Version>1</Version>"));
    assert_eq!(requests_for(&server, "GetSingleProject").await.len(), 1);
}

#[tokio::test]
async fn failed_save_surfaces_remote_status_without_a_partial_record() {
    let server = MockServer::start().await;
    let client = connect(&server, CHUNK_SIZE).await;

    Mock::given(method("POST"))
        .and(path("/Project.asmx"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database offline"))
        .mount(&server)
        .await;

    let err = client.projects().create("Doomed").await.unwrap_err();
    match err {
        TwentyFourError::RemoteStatus { operation, status, message } => {
            assert_eq!(operation, "SaveProject");
            assert_eq!(status, 500);
            assert!(message.contains("database offline"));
        }
        other => panic!("expected remote status error, got {:?}", other),
    }
    // The reload never ran.
    assert!(requests_for(&server, "GetSingleProject").await.is_empty());
}

#[tokio::test]
async fn project_search_renders_criteria_and_parses_matches() {
    let server = MockServer::start().await;
    let client = connect(&server, CHUNK_SIZE).await;

    mount_operation(
        &server,
        "Project",
        "GetProjectList",
        &format!(
            "<GetProjectListResponse><GetProjectListResult>\
             <Project>{}</Project><Project>{}</Project>\
             </GetProjectListResult></GetProjectListResponse>",
            project_fragment(1, "Alpha"),
            project_fragment(2, "Beta"),
        ),
    )
    .await;

    let mut search = ProjectSearch::default();
    search.set("CustomerId", "7").expect("known field");
    search.set("Search", "web").expect("known field");

    let projects = client.projects().find(&search).await.expect("search succeeds");
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "Alpha");
    assert_eq!(projects[1].customer_id, Some(7));

    let requests = requests_for(&server, "GetProjectList").await;
    assert!(requests[0].contains("<CustomerId>7</CustomerId>"));
    assert!(requests[0].contains("<Search>web</Search>"));
}

#[tokio::test]
async fn empty_project_search_result_is_an_empty_list() {
    let server = MockServer::start().await;
    let client = connect(&server, CHUNK_SIZE).await;

    mount_operation(
        &server,
        "Project",
        "GetProjectList",
        "<GetProjectListResponse><GetProjectListResult></GetProjectListResult></GetProjectListResponse>",
    )
    .await;

    let mut search = ProjectSearch::default();
    search.set("Search", "nothing here").expect("known field");
    let projects = client.projects().find(&search).await.expect("empty search succeeds");
    assert!(projects.is_empty());
}

#[tokio::test]
async fn unknown_search_field_is_rejected_locally() {
    let mut search = ProjectSearch::default();
    let err = search.set("Telepathy", "yes").unwrap_err();
    assert!(matches!(err, TwentyFourError::InvalidInput(_)));
}

#[tokio::test]
async fn company_get_returns_none_for_no_match() {
    let server = MockServer::start().await;
    let client = connect(&server, CHUNK_SIZE).await;

    mount_operation(
        &server,
        "Company",
        "GetCompanies",
        "<GetCompaniesResponse><GetCompaniesResult></GetCompaniesResult></GetCompaniesResponse>",
    )
    .await;

    let company = client.companies().get(42).await.expect("lookup succeeds");
    assert!(company.is_none());
}

#[tokio::test]
async fn company_get_with_multiple_matches_is_too_many_results() {
    let server = MockServer::start().await;
    let client = connect(&server, CHUNK_SIZE).await;

    mount_operation(
        &server,
        "Company",
        "GetCompanies",
        "<GetCompaniesResponse><GetCompaniesResult>\
         <Company><Id>42</Id><Name>Acme AS</Name></Company>\
         <Company><Id>43</Id><Name>Acme ASA</Name></Company>\
         </GetCompaniesResult></GetCompaniesResponse>",
    )
    .await;

    let err = client.companies().get(42).await.unwrap_err();
    assert!(matches!(err, TwentyFourError::TooManyResults(_)));
}

#[tokio::test]
async fn company_search_without_criteria_never_reaches_the_server() {
    let server = MockServer::start().await;
    let client = connect(&server, CHUNK_SIZE).await;

    let err = client.companies().find(&CompanySearch::default()).await.unwrap_err();
    assert!(matches!(err, TwentyFourError::InvalidInput(_)));
    assert!(requests_for(&server, "GetCompanies").await.is_empty());
}

#[tokio::test]
async fn company_search_requests_the_full_property_list() {
    let server = MockServer::start().await;
    let client = connect(&server, CHUNK_SIZE).await;

    mount_operation(
        &server,
        "Company",
        "GetCompanies",
        "<GetCompaniesResponse><GetCompaniesResult>\
         <Company><Id>88</Id><Name>Acme AS</Name><Country>NO</Country></Company>\
         </GetCompaniesResult></GetCompaniesResponse>",
    )
    .await;

    let companies =
        client.companies().find(&CompanySearch::by_name("Acme")).await.expect("search succeeds");
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].country.as_deref(), Some("NO"));

    let requests = requests_for(&server, "GetCompanies").await;
    assert!(requests[0].contains("<CompanyName>Acme</CompanyName>"));
    assert!(requests[0].contains("<string>OrganizationNumber</string>"));
    assert!(requests[0].contains("<string>EmailAddresses</string>"));
}

#[tokio::test]
async fn save_company_sends_defaults_and_returns_stored_records() {
    let server = MockServer::start().await;
    let client = connect(&server, CHUNK_SIZE).await;

    mount_operation(
        &server,
        "Company",
        "SaveCompanies",
        "<SaveCompaniesResponse><SaveCompaniesResult>\
         <Company><Id>501</Id><Name>Acme AS</Name><Type>Supplier</Type></Company>\
         </SaveCompaniesResult></SaveCompaniesResponse>",
    )
    .await;

    let mut company = NewCompany::new("Acme AS");
    company.email_work = Some("post@acme.no".into());

    let saved = client.companies().save(&company).await.expect("save succeeds");
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, 501);

    let requests = requests_for(&server, "SaveCompanies").await;
    assert!(requests[0].contains("<Type>Supplier</Type>"));
    assert!(requests[0].contains("<Country>NO</Country>"));
    assert!(requests[0].contains("<EmailAddresses><Work><Value>post@acme.no</Value></Work></EmailAddresses>"));
}

#[tokio::test]
async fn assign_categories_resolves_names_to_key_value_pairs() {
    let server = MockServer::start().await;
    let client = connect(&server, CHUNK_SIZE).await;

    mount_operation(
        &server,
        "Company",
        "GetCategories",
        "<GetCategoriesResponse><GetCategoriesResult>\
         <Category><Id>10</Id><Name>Customer</Name></Category>\
         <Category><Id>20</Id><Name>Partner</Name></Category>\
         </GetCategoriesResult></GetCategoriesResponse>",
    )
    .await;
    mount_operation(
        &server,
        "Company",
        "SaveCustomerCategories",
        "<SaveCustomerCategoriesResponse></SaveCustomerCategoriesResponse>",
    )
    .await;

    client
        .companies()
        .assign_categories(88, &["Partner", "Unheard Of"])
        .await
        .expect("assignment succeeds");

    let requests = requests_for(&server, "SaveCustomerCategories").await;
    assert_eq!(requests.len(), 1);
    // Known name resolved; unknown name skipped rather than sent.
    assert!(requests[0].contains("<KeyValuePair><Key>20</Key><Value>88</Value></KeyValuePair>"));
    assert!(!requests[0].contains("Unheard Of"));
}

#[tokio::test]
async fn categories_of_parses_the_id_list() {
    let server = MockServer::start().await;
    let client = connect(&server, CHUNK_SIZE).await;

    mount_operation(
        &server,
        "Company",
        "GetCustomerCategories",
        "<GetCustomerCategoriesResponse><GetCustomerCategoriesResult>\
         <int>10</int><int>30</int>\
         </GetCustomerCategoriesResult></GetCustomerCategoriesResponse>",
    )
    .await;

    let ids = client.companies().categories_of(88).await.expect("lookup succeeds");
    assert_eq!(ids, vec![10, 30]);
}
