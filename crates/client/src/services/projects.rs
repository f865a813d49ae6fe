//! Project service operations

use chrono::{DateTime, Utc};
use tracing::info;
use twentyfour_domain::{Project, ProjectSearch, Result, TwentyFourError};

use crate::client::ApiClient;
use crate::endpoints::Service;
use crate::soap::document::{tag_int, tag_text};
use crate::soap::{Field, SoapRequest};

/// Operations against the vendor `Project` service.
pub struct ProjectsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProjectsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Load a single project by id (`GetSingleProject`).
    pub async fn get(&self, project_id: i32) -> Result<Project> {
        let service = self.client.service(Service::Project).await;
        let document = service
            .call(SoapRequest::new("GetSingleProject").text("projectId", project_id.to_string()))
            .await?;

        let fragment = document
            .all("GetSingleProjectResult")
            .into_iter()
            .next()
            .ok_or_else(|| TwentyFourError::Soap("GetSingleProject returned no project".into()))?;
        parse_project(fragment)
    }

    /// Create an empty project with the given name and return the stored
    /// record (`SaveProject` followed by `GetSingleProject`).
    pub async fn create(&self, name: &str) -> Result<Project> {
        let service = self.client.service(Service::Project).await;
        let request = SoapRequest::new("SaveProject").element(
            "project",
            vec![
                Field::text("Name", name),
                // Empty display-name record; Version 1 disables rights management.
                Field::element("NameDisplay", vec![]),
                Field::text("Version", "1"),
            ],
        );
        let document = service.call(request).await?;
        let project_id = document.int_of("SaveProjectResult").ok_or_else(|| {
            TwentyFourError::Soap("SaveProject response carried no project id".into())
        })? as i32;
        info!(project_id, "created new project");

        self.get(project_id).await
    }

    /// Save an existing project record; returns the saved id.
    pub async fn save(&self, project: &Project) -> Result<i32> {
        let service = self.client.service(Service::Project).await;
        let mut fields = vec![
            Field::text("Id", project.id.to_string()),
            Field::text("Name", project.name.clone()),
        ];
        if let Some(customer_id) = project.customer_id {
            fields.push(Field::text("CustomerId", customer_id.to_string()));
        }
        fields.push(Field::text("Version", project.version.to_string()));

        let document =
            service.call(SoapRequest::new("SaveProject").element("project", fields)).await?;
        let saved_id = document.int_of("SaveProjectResult").ok_or_else(|| {
            TwentyFourError::Soap("SaveProject response carried no project id".into())
        })? as i32;
        info!(project_id = project.id, "project saved");
        Ok(saved_id)
    }

    /// Search projects (`GetProjectList`). An empty result set is `Ok(vec![])`.
    pub async fn find(&self, search: &ProjectSearch) -> Result<Vec<Project>> {
        let service = self.client.service(Service::Project).await;
        let request =
            SoapRequest::new("GetProjectList").element("searchParams", search_fields(search));
        let document = service.call(request).await?;

        document.all("Project").into_iter().map(parse_project).collect()
    }
}

fn search_fields(search: &ProjectSearch) -> Vec<Field> {
    let mut fields = Vec::new();
    if let Some(customer_id) = search.customer_id {
        fields.push(Field::text("CustomerId", customer_id.to_string()));
    }
    if let Some(text) = &search.search {
        fields.push(Field::text("Search", text.clone()));
    }
    if let Some(changed_after) = search.changed_after {
        fields.push(Field::text("ChangedAfter", render_datetime(changed_after)));
    }
    if let Some(started_after) = search.started_after {
        fields.push(Field::text("StartedAfter", render_datetime(started_after)));
    }
    if let Some(started_before) = search.started_before {
        fields.push(Field::text("StartedBefore", render_datetime(started_before)));
    }
    if let Some(my_projects) = search.my_projects {
        fields.push(Field::text("MyProjects", my_projects.to_string()));
    }
    if let Some(all_open) = search.all_open_projects {
        fields.push(Field::text("AllOpenProjects", all_open.to_string()));
    }
    fields
}

pub(crate) fn render_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn parse_project(fragment: &str) -> Result<Project> {
    let id = tag_int(fragment, "Id")
        .ok_or_else(|| TwentyFourError::Soap("project record carried no Id".into()))?
        as i32;
    let name = tag_text(fragment, "Name").unwrap_or_default();
    let customer_id = tag_int(fragment, "CustomerId").map(|value| value as i32);
    let version = tag_int(fragment, "Version").unwrap_or(1) as i32;
    Ok(Project { id, name, customer_id, version })
}
