use explorer_core::{Effect, Endpoint, FetchRequest, FetchedPage, Movie, MovieId, Msg};
use explorer_engine::{
    ApiSettings, EngineEvent, EngineHandle, Listing, MoviePage, MovieRequest, MovieSummary,
};
use explorer_logging::explorer_warn;

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ApiSettings) -> std::io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchMovies {
                    generation,
                    request,
                } => self.engine.enqueue(generation, map_request(request)),
            }
        }
    }

    /// Drains every engine event that has arrived so far.
    pub fn drain_messages(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_request(request: FetchRequest) -> MovieRequest {
    MovieRequest {
        listing: match request.endpoint {
            Endpoint::Popular => Listing::Popular,
            Endpoint::Search { query } => Listing::Search(query),
        },
        page: request.page,
        api_key: request.api_key.expose().to_string(),
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted { generation, result } => match result {
            Ok(page) => Msg::FetchSucceeded {
                generation,
                page: map_page(page),
            },
            Err(err) => {
                explorer_warn!("Fetch generation={} failed: {} ({})", generation, err, err.kind);
                Msg::FetchFailed {
                    generation,
                    message: Some(err.message),
                }
            }
        },
    }
}

fn map_page(page: MoviePage) -> FetchedPage {
    FetchedPage {
        movies: page.movies.into_iter().map(map_movie).collect(),
        total_pages: page.total_pages,
    }
}

fn map_movie(summary: MovieSummary) -> Movie {
    Movie {
        id: MovieId(summary.id),
        title: summary.title,
        release_date: summary.release_date,
        vote_average: summary.vote_average,
        poster_path: summary.poster_path,
    }
}

#[cfg(test)]
mod tests {
    use explorer_core::ApiKey;
    use explorer_engine::{FailureKind, FetchError};

    use super::*;

    #[test]
    fn search_effect_maps_to_search_listing() {
        let request = map_request(FetchRequest {
            endpoint: Endpoint::Search {
                query: "heat".to_string(),
            },
            page: 4,
            api_key: ApiKey::new("k").unwrap(),
        });
        assert_eq!(request.listing, Listing::Search("heat".to_string()));
        assert_eq!(request.page, 4);
        assert_eq!(request.api_key, "k");
    }

    #[test]
    fn failed_fetch_keeps_generation_and_message() {
        let msg = map_event(EngineEvent::FetchCompleted {
            generation: 3,
            result: Err(FetchError {
                kind: FailureKind::Network,
                message: "connection refused".to_string(),
            }),
        });
        assert_eq!(
            msg,
            Msg::FetchFailed {
                generation: 3,
                message: Some("connection refused".to_string()),
            }
        );
    }

    #[test]
    fn fetched_movies_keep_their_fields() {
        let msg = map_event(EngineEvent::FetchCompleted {
            generation: 1,
            result: Ok(MoviePage {
                movies: vec![MovieSummary {
                    id: "10".to_string(),
                    title: "Ten".to_string(),
                    release_date: Some("2010-10-10".to_string()),
                    vote_average: Some(6.5),
                    poster_path: None,
                }],
                total_pages: 2,
            }),
        });
        let Msg::FetchSucceeded { page, .. } = msg else {
            panic!("expected success");
        };
        assert_eq!(page.total_pages, 2);
        assert_eq!(
            page.movies[0],
            Movie::new("10", "Ten")
                .with_release_date("2010-10-10")
                .with_vote_average(6.5)
        );
    }
}
