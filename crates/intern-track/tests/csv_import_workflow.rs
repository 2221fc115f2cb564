//! Integration specifications for hydrating the tracker from a CSV export
//! and aggregating the imported records into the flow graph.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use intern_track::tracker::{
    ApplicationId, CsvRecordImporter, FlowNode, InternshipRecord, InternshipRepository,
    InternshipTrackerService, RepositoryError,
};

#[derive(Default)]
struct MemoryRepository {
    records: Arc<Mutex<HashMap<ApplicationId, InternshipRecord>>>,
}

impl InternshipRepository for MemoryRepository {
    fn insert(&self, record: InternshipRecord) -> Result<InternshipRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: InternshipRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<InternshipRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &ApplicationId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn list(&self) -> Result<Vec<InternshipRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }
}

const EXPORT: &str = "Company,Role,Date Applied,Status\n\
Google,Software Engineering Intern,2025-09-01,Applied\n\
Microsoft,Data Science Intern,2025-09-03,Interview\n\
Figma,Product Engineering Intern,2025-09-05,Offer\n\
Datadog,Site Reliability Intern,2025-09-08,Rejected\n\
Notion,Growth Engineering Intern,2025-09-10,Phone Screen\n\
,Missing Company Intern,2025-09-11,Applied\n";

#[test]
fn imported_export_feeds_the_flow_graph() {
    let drafts = CsvRecordImporter::from_reader(Cursor::new(EXPORT)).expect("import succeeds");
    assert_eq!(drafts.len(), 5, "row without a company is skipped");

    let service = InternshipTrackerService::new(Arc::new(MemoryRepository::default()));
    for draft in drafts {
        service.submit(draft).expect("imported draft submits");
    }

    let graph = service.flow().expect("flow aggregates");
    let tally = graph.tally();

    assert_eq!(tally.total, 5);
    assert_eq!(tally.applied, 1);
    assert_eq!(tally.interview, 1);
    assert_eq!(tally.offer, 1);
    assert_eq!(tally.rejected, 1);
    assert_eq!(graph.uncategorized(), 1);

    let offer_inflow: usize = graph
        .edges()
        .iter()
        .filter(|edge| edge.target == FlowNode::Offer)
        .map(|edge| edge.weight)
        .sum();
    assert_eq!(offer_inflow, 1);

    let interview_rejections: usize = graph
        .edges()
        .iter()
        .filter(|edge| {
            edge.source == FlowNode::Interview && edge.target == FlowNode::Rejected
        })
        .map(|edge| edge.weight)
        .sum();
    assert_eq!(
        interview_rejections, 0,
        "the only interview is matched with the offer"
    );
}
